use crate::{
    error::CalenduhError,
    shared::{
        auth::{protect_route, user_can_modify_calendar},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::delete_event::*;
use calenduh_domain::{CalendarEvent, ID};
use calenduh_infra::CalenduhContext;

pub async fn delete_event_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    let calendar = user_can_modify_calendar(&authed, &path.calendar_id, &ctx).await?;

    let usecase = DeleteEventUseCase {
        calendar_id: calendar.id,
        event_id: path.event_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(CalenduhError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub calendar_id: ID,
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The calendar event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = CalendarEvent;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        match ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
        {
            Some(event) if event.calendar_id == self.calendar_id => ctx
                .repos
                .events
                .delete(&event.id)
                .await
                .map(|_| event)
                .map_err(|_| UseCaseError::StorageError),
            _ => Err(UseCaseError::NotFound(self.event_id)),
        }
    }
}
