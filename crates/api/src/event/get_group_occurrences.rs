use super::get_groups_occurrences::GetGroupsOccurrencesUseCase;
use crate::{
    error::CalenduhError,
    shared::{auth::protect_route, usecase::execute},
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::{dtos::OccurrenceDTO, get_group_occurrences::*};
use calenduh_infra::CalenduhContext;

pub async fn get_group_occurrences_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    if !authed.is_member_of(&path.group_id) {
        return Err(CalenduhError::NotFound(format!(
            "The group with id: {}, was not found.",
            path.group_id
        )));
    }

    let query = query.0;
    let usecase = GetGroupsOccurrencesUseCase {
        group_ids: vec![path.group_id],
        start: query.start,
        end: query.end,
    };

    execute(usecase, &ctx)
        .await
        .map(|occurrences| {
            let res: APIResponse = occurrences.into_iter().map(OccurrenceDTO::new).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(CalenduhError::from)
}
