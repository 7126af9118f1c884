use super::expand::{expand_calendars, resolve_window, ExpandError};
use crate::{
    error::CalenduhError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::{dtos::OccurrenceDTO, get_my_occurrences::*};
use calenduh_domain::{Occurrence, ID};
use calenduh_infra::CalenduhContext;

pub async fn get_my_occurrences_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    let query = query.0;
    let usecase = GetMyOccurrencesUseCase {
        user_id: authed.user.id,
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

/// Occurrences from the calendars the user owns and the calendars the user
/// is subscribed to
#[derive(Debug)]
pub struct GetMyOccurrencesUseCase {
    pub user_id: ID,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMyOccurrencesUseCase {
    type Response = Vec<Occurrence>;
    type Error = ExpandError;

    const NAME: &'static str = "GetMyOccurrences";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let window = resolve_window(&self.start, &self.end)?;

        let mut calendar_ids = ctx
            .repos
            .calendars
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| ExpandError::StorageError)?
            .into_iter()
            .map(|c| c.id)
            .collect::<Vec<_>>();
        let subscribed = ctx
            .repos
            .subscriptions
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| ExpandError::StorageError)?;
        for subscription in subscribed {
            if !calendar_ids.contains(&subscription.calendar_id) {
                calendar_ids.push(subscription.calendar_id);
            }
        }

        expand_calendars(&calendar_ids, window, ctx).await
    }
}
