use crate::dtos::{CalendarEventDTO, OccurrenceDTO};
use calenduh_domain::{CalendarEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventResponse {
    pub event: CalendarEventDTO,
}

impl CalendarEventResponse {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            event: CalendarEventDTO::new(event),
        }
    }
}

#[derive(Deserialize)]
pub struct EventPathParams {
    pub calendar_id: ID,
    pub event_id: ID,
}

/// Window bounds in millis since epoch. Kept textual so that malformed
/// values are reported by the window resolver.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct OccurrencesQueryParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Occurrences sorted by start
pub type OccurrencesResponse = Vec<OccurrenceDTO>;

pub mod create_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub calendar_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub description: Option<String>,
        pub location: Option<String>,
        pub notification: Option<String>,
        pub frequency: Option<String>,
        pub priority: Option<i32>,
        pub all_day: Option<bool>,
        pub start_ts: i64,
        pub end_ts: i64,
    }

    pub type APIResponse = CalendarEventResponse;
}

pub mod get_event {
    use super::*;

    pub type PathParams = EventPathParams;
    pub type APIResponse = CalendarEventResponse;
}

pub mod update_event {
    use super::*;

    pub type PathParams = EventPathParams;

    /// Absent fields are left unchanged. An empty `frequency` stops the
    /// event from recurring.
    #[derive(Debug, Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
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

    pub type APIResponse = CalendarEventResponse;
}

pub mod delete_event {
    use super::*;

    pub type PathParams = EventPathParams;
    pub type APIResponse = CalendarEventResponse;
}

pub mod get_calendar_occurrences {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub calendar_id: ID,
    }

    pub type QueryParams = OccurrencesQueryParams;
    pub type APIResponse = OccurrencesResponse;
}

pub mod get_my_occurrences {
    use super::*;

    pub type QueryParams = OccurrencesQueryParams;
    pub type APIResponse = OccurrencesResponse;
}

pub mod get_groups_occurrences {
    use super::*;

    pub type QueryParams = OccurrencesQueryParams;
    pub type APIResponse = OccurrencesResponse;
}

pub mod get_group_occurrences {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub group_id: ID,
    }

    pub type QueryParams = OccurrencesQueryParams;
    pub type APIResponse = OccurrencesResponse;
}
