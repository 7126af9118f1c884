use crate::error::CalenduhError;
use actix_web::web;
use calenduh_domain::{
    EventSetExpander, ExpansionError, InvalidWindowError, Occurrence, TimeWindow, WindowResolver,
    ID,
};
use calenduh_infra::CalenduhContext;
use tokio_util::sync::CancellationToken;
use tracing::error;

/// Failure modes shared by every occurrence query
#[derive(Debug)]
pub enum ExpandError {
    InvalidWindow(InvalidWindowError),
    InvalidRecurrenceRule(ID),
    Cancelled,
    StorageError,
}

impl From<ExpandError> for CalenduhError {
    fn from(e: ExpandError) -> Self {
        match e {
            ExpandError::InvalidWindow(e) => Self::BadClientData(e.to_string()),
            ExpandError::InvalidRecurrenceRule(_)
            | ExpandError::Cancelled
            | ExpandError::StorageError => Self::InternalError,
        }
    }
}

pub fn resolve_window(
    start: &Option<String>,
    end: &Option<String>,
) -> Result<TimeWindow, ExpandError> {
    WindowResolver::resolve(start.as_deref(), end.as_deref()).map_err(ExpandError::InvalidWindow)
}

/// Loads the events of the given calendars and expands them into the
/// occurrences inside `window`.
///
/// Expansion runs on the blocking thread pool. If the request is dropped
/// before it finishes the cancellation token fires and the expander stops
/// at the next event.
pub async fn expand_calendars(
    calendar_ids: &[ID],
    window: TimeWindow,
    ctx: &CalenduhContext,
) -> Result<Vec<Occurrence>, ExpandError> {
    if calendar_ids.is_empty() || window.is_empty() {
        return Ok(Vec::new());
    }

    let events = ctx
        .repos
        .events
        .find_for_expansion(calendar_ids, &window)
        .await
        .map_err(|e| {
            error!("Unable to load events for expansion: {:?}", e);
            ExpandError::StorageError
        })?;

    let expander = EventSetExpander::new(ctx.config.occurrence_cap);
    let token = CancellationToken::new();
    let child = token.child_token();
    let guard = token.drop_guard();

    let res = web::block(move || {
        expander.expand_until_cancelled(&events, &window, || child.is_cancelled())
    })
    .await;
    guard.disarm();

    match res {
        Ok(Ok(occurrences)) => Ok(occurrences),
        Ok(Err(ExpansionError::Cancelled)) => Err(ExpandError::Cancelled),
        Ok(Err(ExpansionError::InvalidRecurrenceRule { event_id, source })) => {
            error!(
                "Event: {} has an invalid recurrence rule: {}",
                event_id, source
            );
            Err(ExpandError::InvalidRecurrenceRule(event_id))
        }
        Err(e) => {
            error!("Expansion task failed: {:?}", e);
            Err(ExpandError::StorageError)
        }
    }
}
