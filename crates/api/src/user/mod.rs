mod get_me;

use actix_web::web;
use get_me::get_me_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/@me", web::get().to(get_me_controller));
}
