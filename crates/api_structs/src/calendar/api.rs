use crate::dtos::CalendarDTO;
use calenduh_domain::{Calendar, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub calendar: CalendarDTO,
}

impl CalendarResponse {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar: CalendarDTO::new(calendar),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarsResponse {
    pub calendars: Vec<CalendarDTO>,
}

impl CalendarsResponse {
    pub fn new(calendars: Vec<Calendar>) -> Self {
        Self {
            calendars: calendars.into_iter().map(CalendarDTO::new).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarBody {
    pub title: String,
    pub color: Option<String>,
    pub is_public: Option<bool>,
}

pub mod create_calendar {
    use super::*;

    pub type RequestBody = CreateCalendarBody;
    pub type APIResponse = CalendarResponse;
}

pub mod create_group_calendar {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub group_id: ID,
    }

    pub type RequestBody = CreateCalendarBody;
    pub type APIResponse = CalendarResponse;
}

pub mod get_my_calendars {
    use super::*;

    pub type APIResponse = CalendarsResponse;
}

pub mod get_subscribed_calendars {
    use super::*;

    pub type APIResponse = CalendarsResponse;
}

pub mod get_calendar {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub calendar_id: ID,
    }

    pub type APIResponse = CalendarResponse;
}

pub mod delete_calendar {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub calendar_id: ID,
    }

    pub type APIResponse = CalendarResponse;
}
