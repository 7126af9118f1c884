mod create_event;
mod delete_event;
mod expand;
mod get_calendar_occurrences;
mod get_event;
mod get_group_occurrences;
mod get_groups_occurrences;
mod get_my_occurrences;
mod update_event;

use actix_web::web;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_calendar_occurrences::get_calendar_occurrences_controller;
use get_event::get_event_controller;
use get_group_occurrences::get_group_occurrences_controller;
use get_groups_occurrences::get_groups_occurrences_controller;
use get_my_occurrences::get_my_occurrences_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Literal segments before the `{calendar_id}` routes
    cfg.route("/events/@me", web::get().to(get_my_occurrences_controller));
    cfg.route(
        "/events/@groups",
        web::get().to(get_groups_occurrences_controller),
    );
    cfg.route(
        "/events/groups/{group_id}",
        web::get().to(get_group_occurrences_controller),
    );

    cfg.route(
        "/events/{calendar_id}",
        web::post().to(create_event_controller),
    );
    cfg.route(
        "/events/{calendar_id}",
        web::get().to(get_calendar_occurrences_controller),
    );
    cfg.route(
        "/events/{calendar_id}/{event_id}",
        web::get().to(get_event_controller),
    );
    cfg.route(
        "/events/{calendar_id}/{event_id}",
        web::put().to(update_event_controller),
    );
    cfg.route(
        "/events/{calendar_id}/{event_id}",
        web::delete().to(delete_event_controller),
    );
}
