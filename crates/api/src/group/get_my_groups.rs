use crate::{error::CalenduhError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::get_my_groups::*;
use calenduh_infra::CalenduhContext;

pub async fn get_my_groups_controller(
    http_req: HttpRequest,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(authed.groups)))
}
