use crate::{
    error::CalenduhError,
    shared::{
        auth::{protect_route, user_can_modify_calendar},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::create_event::*;
use calenduh_domain::{CalendarEvent, ID};
use calenduh_infra::CalenduhContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    let calendar = user_can_modify_calendar(&authed, &path.calendar_id, &ctx).await?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        calendar_id: calendar.id,
        name: body.name,
        description: body.description,
        location: body.location,
        notification: body.notification,
        frequency: body.frequency,
        priority: body.priority.unwrap_or(0),
        all_day: body.all_day.unwrap_or(false),
        start_ts: body.start_ts,
        end_ts: body.end_ts,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(CalenduhError::from)
}

#[derive(Debug, Default)]
pub struct CreateEventUseCase {
    pub calendar_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notification: Option<String>,
    pub frequency: Option<String>,
    pub priority: i32,
    pub all_day: bool,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyName,
    InvalidTimespan,
    InvalidRecurrenceRule(String),
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("The event name can not be empty".into()),
            UseCaseError::InvalidTimespan => Self::BadClientData(
                "The event must have a non negative start_ts and must not end before it starts"
                    .into(),
            ),
            UseCaseError::InvalidRecurrenceRule(msg) => {
                Self::BadClientData(format!("Invalid frequency: {}", msg))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if !CalendarEvent::is_valid_timespan(self.start_ts, self.end_ts) {
            return Err(UseCaseError::InvalidTimespan);
        }

        let now = ctx.sys.get_timestamp_millis();
        let mut event = CalendarEvent {
            id: Default::default(),
            calendar_id: self.calendar_id,
            name: name.to_string(),
            description: self.description.clone(),
            location: self.location.clone(),
            notification: self.notification.clone(),
            frequency: None,
            priority: self.priority,
            all_day: self.all_day,
            start_ts: self.start_ts,
            end_ts: self.end_ts,
            created: now,
            updated: now,
        };
        event
            .set_frequency(self.frequency.clone())
            .map_err(|e| UseCaseError::InvalidRecurrenceRule(e.to_string()))?;

        ctx.repos
            .events
            .insert(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn creates_event() {
        let ctx = CalenduhContext::create_inmemory();
        let mut usecase = CreateEventUseCase {
            name: "Standup".into(),
            frequency: Some(" 0 9 * * * ".into()),
            start_ts: 500,
            end_ts: 1000,
            ..Default::default()
        };

        let event = usecase.execute(&ctx).await.unwrap();
        assert_eq!(event.frequency.as_deref(), Some("0 9 * * *"));
        assert!(ctx.repos.events.find(&event.id).await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn rejects_invalid_input() {
        let ctx = CalenduhContext::create_inmemory();

        let mut usecase = CreateEventUseCase {
            name: "Standup".into(),
            start_ts: 1000,
            end_ts: 500,
            ..Default::default()
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidTimespan)
        ));

        usecase.end_ts = 2000;
        usecase.frequency = Some("whenever".into());
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidRecurrenceRule(_))
        ));

        usecase.frequency = None;
        usecase.name = "".into();
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::EmptyName)
        ));
    }

    #[test]
    fn invalid_timespan_message_states_the_rule() {
        match CalenduhError::from(UseCaseError::InvalidTimespan) {
            CalenduhError::BadClientData(msg) => {
                assert!(msg.contains("must not end before it starts"))
            }
            e => panic!("expected bad client data, got {:?}", e),
        }
    }
}
