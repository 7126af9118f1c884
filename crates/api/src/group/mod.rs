mod get_my_groups;

use actix_web::web;
use get_my_groups::get_my_groups_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/groups/@me", web::get().to(get_my_groups_controller));
}
