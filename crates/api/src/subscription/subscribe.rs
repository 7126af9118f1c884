use crate::{
    error::CalenduhError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::subscribe::*;
use calenduh_domain::{Calendar, Subscription, ID};
use calenduh_infra::CalenduhContext;

pub async fn subscribe_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = SubscribeUseCase {
        user_id: authed.user.id,
        group_ids: authed.group_ids(),
        calendar_id: body.calendar_id,
        invite_code: body.invite_code,
    };

    execute(usecase, &ctx)
        .await
        .map(|subscription| HttpResponse::Created().json(APIResponse::new(subscription)))
        .map_err(CalenduhError::from)
}

/// Subscribes the user to a calendar. A known invite code grants access to
/// any calendar, while subscribing by id requires the calendar to be public
/// or already readable by the user.
#[derive(Debug)]
pub struct SubscribeUseCase {
    pub user_id: ID,
    pub group_ids: Vec<ID>,
    pub calendar_id: Option<ID>,
    pub invite_code: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingCalendar,
    CalendarNotFound,
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingCalendar => {
                Self::BadClientData("Either calendarId or inviteCode must be given".into())
            }
            UseCaseError::CalendarNotFound => Self::NotFound("The calendar was not found.".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl SubscribeUseCase {
    async fn find_calendar(&self, ctx: &CalenduhContext) -> Result<Calendar, UseCaseError> {
        let invite_code = self
            .invite_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());

        if let Some(code) = invite_code {
            return ctx
                .repos
                .calendars
                .find_by_invite_code(code)
                .await
                .map_err(|_| UseCaseError::StorageError)?
                .ok_or(UseCaseError::CalendarNotFound);
        }

        let calendar_id = self.calendar_id.ok_or(UseCaseError::MissingCalendar)?;
        match ctx
            .repos
            .calendars
            .find(&calendar_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
        {
            Some(calendar) if calendar.can_read(&self.user_id, &self.group_ids, false) => {
                Ok(calendar)
            }
            _ => Err(UseCaseError::CalendarNotFound),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubscribeUseCase {
    type Response = Subscription;
    type Error = UseCaseError;

    const NAME: &'static str = "Subscribe";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let calendar = self.find_calendar(ctx).await?;

        let subscription = Subscription {
            user_id: self.user_id,
            calendar_id: calendar.id,
        };
        ctx.repos
            .subscriptions
            .insert(&subscription)
            .await
            .map(|_| subscription)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use calenduh_domain::CalendarOwner;

    async fn private_calendar(ctx: &CalenduhContext) -> Calendar {
        let mut calendar =
            Calendar::new(CalendarOwner::User(ID::new()), "Club".into(), "#fff".into(), 0);
        calendar.invite_code = Some("join-me".into());
        ctx.repos.calendars.insert(&calendar).await.unwrap();
        calendar
    }

    fn usecase(calendar_id: Option<ID>, invite_code: Option<&str>) -> SubscribeUseCase {
        SubscribeUseCase {
            user_id: ID::new(),
            group_ids: vec![],
            calendar_id,
            invite_code: invite_code.map(String::from),
        }
    }

    #[actix_web::test]
    async fn subscribes_with_invite_code() {
        let ctx = CalenduhContext::create_inmemory();
        let calendar = private_calendar(&ctx).await;

        let mut usecase = usecase(None, Some("join-me"));
        let subscription = usecase.execute(&ctx).await.unwrap();
        assert_eq!(subscription.calendar_id, calendar.id);
        assert!(ctx
            .repos
            .subscriptions
            .exists(&usecase.user_id, &calendar.id)
            .await
            .unwrap());
    }

    #[actix_web::test]
    async fn private_calendar_needs_invite_code() {
        let ctx = CalenduhContext::create_inmemory();
        let mut calendar = private_calendar(&ctx).await;

        assert!(matches!(
            usecase(Some(calendar.id), None).execute(&ctx).await,
            Err(UseCaseError::CalendarNotFound)
        ));
        assert!(matches!(
            usecase(None, Some("wrong")).execute(&ctx).await,
            Err(UseCaseError::CalendarNotFound)
        ));
        assert!(matches!(
            usecase(None, None).execute(&ctx).await,
            Err(UseCaseError::MissingCalendar)
        ));

        calendar.id = ID::new();
        calendar.is_public = true;
        calendar.invite_code = None;
        ctx.repos.calendars.insert(&calendar).await.unwrap();
        assert!(usecase(Some(calendar.id), None).execute(&ctx).await.is_ok());
    }
}
