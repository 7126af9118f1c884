use crate::{
    error::CalenduhError,
    shared::{
        auth::{protect_route, user_can_modify_calendar},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::delete_calendar::{APIResponse, PathParams};
use calenduh_domain::{Calendar, ID};
use calenduh_infra::CalenduhContext;

pub async fn delete_calendar_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    let calendar = user_can_modify_calendar(&authed, &path.calendar_id, &ctx).await?;

    let usecase = DeleteCalendarUseCase {
        calendar_id: calendar.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|calendar| HttpResponse::Ok().json(APIResponse::new(calendar)))
        .map_err(CalenduhError::from)
}

/// Deletes the calendar together with its events and subscriptions
#[derive(Debug)]
pub struct DeleteCalendarUseCase {
    pub calendar_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(calendar_id) => Self::NotFound(format!(
                "The calendar with id: {}, was not found.",
                calendar_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCalendarUseCase {
    type Response = Calendar;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCalendar";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let calendar = ctx
            .repos
            .calendars
            .delete(&self.calendar_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.calendar_id))?;

        ctx.repos
            .events
            .delete_by_calendar(&calendar.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .subscriptions
            .delete_by_calendar(&calendar.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(calendar)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use calenduh_domain::{CalendarEvent, CalendarOwner, Subscription};

    #[actix_web::test]
    async fn removes_events_and_subscriptions() {
        let ctx = CalenduhContext::create_inmemory();
        let calendar = Calendar::new(CalendarOwner::User(ID::new()), "Work".into(), "#fff".into(), 0);
        ctx.repos.calendars.insert(&calendar).await.unwrap();
        let event = CalendarEvent {
            id: Default::default(),
            calendar_id: calendar.id,
            name: "Standup".into(),
            description: None,
            location: None,
            notification: None,
            frequency: None,
            priority: 0,
            all_day: false,
            start_ts: 10,
            end_ts: 20,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        let subscriber = ID::new();
        ctx.repos
            .subscriptions
            .insert(&Subscription {
                user_id: subscriber,
                calendar_id: calendar.id,
            })
            .await
            .unwrap();

        let mut usecase = DeleteCalendarUseCase {
            calendar_id: calendar.id,
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.calendars.find(&calendar.id).await.unwrap().is_none());
        assert!(ctx.repos.events.find(&event.id).await.unwrap().is_none());
        assert!(!ctx
            .repos
            .subscriptions
            .exists(&subscriber, &calendar.id)
            .await
            .unwrap());

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
