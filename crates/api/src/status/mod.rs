use actix_web::{web, HttpResponse};
use calenduh_api_structs::get_service_health::*;
use calenduh_infra::CalenduhContext;

async fn status(ctx: web::Data<CalenduhContext>) -> HttpResponse {
    let uptime = (ctx.sys.get_timestamp_millis() - ctx.started_at) / 1000;
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        uptime,
        active_users: ctx.activity.active_users.len(),
        daily_users: ctx.activity.daily_users.len(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
