use crate::{
    error::CalenduhError,
    shared::auth::{protect_route, user_can_read_calendar},
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::get_calendar::{APIResponse, PathParams};
use calenduh_infra::CalenduhContext;

pub async fn get_calendar_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    let calendar = user_can_read_calendar(&authed, &path.calendar_id, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(calendar)))
}
