use calenduh_domain::{CalendarEvent, Occurrence, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    pub id: ID,
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
    pub created: i64,
    pub updated: i64,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            calendar_id: event.calendar_id,
            name: event.name,
            description: event.description,
            location: event.location,
            notification: event.notification,
            frequency: event.frequency,
            priority: event.priority,
            all_day: event.all_day,
            start_ts: event.start_ts,
            end_ts: event.end_ts,
            created: event.created,
            updated: event.updated,
        }
    }
}

/// One concrete instance of an event inside the queried window
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceDTO {
    pub event_id: ID,
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

impl OccurrenceDTO {
    pub fn new(occurrence: Occurrence) -> Self {
        Self {
            event_id: occurrence.event_id,
            calendar_id: occurrence.calendar_id,
            name: occurrence.name,
            description: occurrence.description,
            location: occurrence.location,
            notification: occurrence.notification,
            frequency: occurrence.frequency,
            priority: occurrence.priority,
            all_day: occurrence.all_day,
            start_ts: occurrence.start_ts,
            end_ts: occurrence.end_ts,
        }
    }
}
