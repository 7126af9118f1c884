use super::expand::{expand_calendars, resolve_window, ExpandError};
use crate::{
    error::CalenduhError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::{dtos::OccurrenceDTO, get_groups_occurrences::*};
use calenduh_domain::{Occurrence, ID};
use calenduh_infra::CalenduhContext;

pub async fn get_groups_occurrences_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    let query = query.0;
    let usecase = GetGroupsOccurrencesUseCase {
        group_ids: authed.group_ids(),
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

/// Occurrences from the calendars owned by the given groups. Also used for
/// a single group.
#[derive(Debug)]
pub struct GetGroupsOccurrencesUseCase {
    pub group_ids: Vec<ID>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetGroupsOccurrencesUseCase {
    type Response = Vec<Occurrence>;
    type Error = ExpandError;

    const NAME: &'static str = "GetGroupsOccurrences";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let window = resolve_window(&self.start, &self.end)?;
        if self.group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let calendar_ids = ctx
            .repos
            .calendars
            .find_by_groups(&self.group_ids)
            .await
            .map_err(|_| ExpandError::StorageError)?
            .into_iter()
            .map(|c| c.id)
            .collect::<Vec<_>>();

        expand_calendars(&calendar_ids, window, ctx).await
    }
}
