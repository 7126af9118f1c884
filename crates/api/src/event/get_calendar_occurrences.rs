use super::expand::{expand_calendars, resolve_window, ExpandError};
use crate::{
    error::CalenduhError,
    shared::{
        auth::{protect_route, user_can_read_calendar},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::{dtos::OccurrenceDTO, get_calendar_occurrences::*};
use calenduh_domain::{Occurrence, ID};
use calenduh_infra::CalenduhContext;

pub async fn get_calendar_occurrences_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    let calendar = user_can_read_calendar(&authed, &path.calendar_id, &ctx).await?;

    let query = query.0;
    let usecase = GetCalendarOccurrencesUseCase {
        calendar_id: calendar.id,
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

/// Occurrences of a single calendar inside the window given by the raw
/// `start` and `end` query values
#[derive(Debug)]
pub struct GetCalendarOccurrencesUseCase {
    pub calendar_id: ID,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarOccurrencesUseCase {
    type Response = Vec<Occurrence>;
    type Error = ExpandError;

    const NAME: &'static str = "GetCalendarOccurrences";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let window = resolve_window(&self.start, &self.end)?;
        expand_calendars(&[self.calendar_id], window, ctx).await
    }
}
