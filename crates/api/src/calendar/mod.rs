mod create_calendar;
mod delete_calendar;
mod get_calendar;
mod get_my_calendars;
mod get_subscribed_calendars;

use actix_web::web;
use create_calendar::{create_calendar_controller, create_group_calendar_controller};
use delete_calendar::delete_calendar_controller;
use get_calendar::get_calendar_controller;
use get_my_calendars::get_my_calendars_controller;
use get_subscribed_calendars::get_subscribed_calendars_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calendars/@me", web::post().to(create_calendar_controller));
    cfg.route("/calendars/@me", web::get().to(get_my_calendars_controller));
    cfg.route(
        "/calendars/@subscribed",
        web::get().to(get_subscribed_calendars_controller),
    );
    cfg.route(
        "/calendars/groups/{group_id}",
        web::post().to(create_group_calendar_controller),
    );

    cfg.route(
        "/calendars/{calendar_id}",
        web::get().to(get_calendar_controller),
    );
    cfg.route(
        "/calendars/{calendar_id}",
        web::delete().to(delete_calendar_controller),
    );
}
