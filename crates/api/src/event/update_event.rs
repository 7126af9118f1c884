use crate::{
    error::CalenduhError,
    shared::{
        auth::{protect_route, user_can_modify_calendar},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::update_event::*;
use calenduh_domain::{CalendarEvent, ID};
use calenduh_infra::CalenduhContext;

pub async fn update_event_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    let calendar = user_can_modify_calendar(&authed, &path.calendar_id, &ctx).await?;

    let body = body.0;
    let usecase = UpdateEventUseCase {
        calendar_id: calendar.id,
        event_id: path.event_id,
        name: body.name,
        description: body.description,
        location: body.location,
        notification: body.notification,
        frequency: body.frequency,
        priority: body.priority,
        all_day: body.all_day,
        start_ts: body.start_ts,
        end_ts: body.end_ts,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(CalenduhError::from)
}

#[derive(Debug, Default)]
pub struct UpdateEventUseCase {
    pub calendar_id: ID,
    pub event_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notification: Option<String>,
    pub frequency: Option<String>,
    pub priority: Option<i32>,
    pub all_day: Option<bool>,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyName,
    InvalidTimespan,
    InvalidRecurrenceRule(String),
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The calendar event with id: {}, was not found.",
                event_id
            )),
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
impl UseCase for UpdateEventUseCase {
    type Response = CalendarEvent;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let mut event = match ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
        {
            Some(event) if event.calendar_id == self.calendar_id => event,
            _ => return Err(UseCaseError::NotFound(self.event_id)),
        };

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            event.name = name.to_string();
        }
        if let Some(description) = &self.description {
            event.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            event.location = Some(location.clone());
        }
        if let Some(notification) = &self.notification {
            event.notification = Some(notification.clone());
        }
        if let Some(priority) = self.priority {
            event.priority = priority;
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
        if self.frequency.is_some() {
            event
                .set_frequency(self.frequency.clone())
                .map_err(|e| UseCaseError::InvalidRecurrenceRule(e.to_string()))?;
        }

        let start_ts = self.start_ts.unwrap_or(event.start_ts);
        let end_ts = self.end_ts.unwrap_or(event.end_ts);
        if !CalendarEvent::is_valid_timespan(start_ts, end_ts) {
            return Err(UseCaseError::InvalidTimespan);
        }
        event.start_ts = start_ts;
        event.end_ts = end_ts;
        event.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    async fn stored_event(ctx: &CalenduhContext) -> CalendarEvent {
        let event = CalendarEvent {
            id: Default::default(),
            calendar_id: ID::new(),
            name: "Standup".into(),
            description: None,
            location: None,
            notification: None,
            frequency: Some("0 9 * * *".into()),
            priority: 1,
            all_day: false,
            start_ts: 1000,
            end_ts: 2000,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    #[actix_web::test]
    async fn updates_only_given_fields() {
        let ctx = CalenduhContext::create_inmemory();
        let event = stored_event(&ctx).await;

        let mut usecase = UpdateEventUseCase {
            calendar_id: event.calendar_id,
            event_id: event.id,
            location: Some("Room 1".into()),
            end_ts: Some(3000),
            ..Default::default()
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.name, "Standup");
        assert_eq!(updated.location.as_deref(), Some("Room 1"));
        assert_eq!(updated.frequency, event.frequency);
        assert_eq!((updated.start_ts, updated.end_ts), (1000, 3000));
    }

    #[actix_web::test]
    async fn empty_frequency_stops_recurrence() {
        let ctx = CalenduhContext::create_inmemory();
        let event = stored_event(&ctx).await;

        let mut usecase = UpdateEventUseCase {
            calendar_id: event.calendar_id,
            event_id: event.id,
            frequency: Some("".into()),
            ..Default::default()
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert!(!updated.is_recurring());
        let stored = ctx.repos.events.find(&event.id).await.unwrap().unwrap();
        assert!(stored.frequency.is_none());
    }

    #[actix_web::test]
    async fn rejects_event_from_other_calendar_and_bad_input() {
        let ctx = CalenduhContext::create_inmemory();
        let event = stored_event(&ctx).await;

        let mut usecase = UpdateEventUseCase {
            calendar_id: ID::new(),
            event_id: event.id,
            ..Default::default()
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));

        usecase.calendar_id = event.calendar_id;
        usecase.start_ts = Some(5000);
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidTimespan)
        ));

        usecase.start_ts = None;
        usecase.frequency = Some("sometimes".into());
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidRecurrenceRule(_))
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
