use crate::{APIResponse, BaseClient};
use calenduh_api_structs::*;
use calenduh_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarEventClient {
    base: Arc<BaseClient>,
}

#[derive(Default)]
pub struct CreateEventInput {
    pub calendar_id: ID,
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

pub struct UpdateEventInput {
    pub calendar_id: ID,
    pub event_id: ID,
    pub body: update_event::RequestBody,
}

/// Window bounds are passed through as given so that the server validates them
#[derive(Default, Clone)]
pub struct GetOccurrencesInput {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl GetOccurrencesInput {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    fn query(self) -> OccurrencesQueryParams {
        OccurrencesQueryParams {
            start: self.start,
            end: self.end,
        }
    }
}

impl CalendarEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            name: input.name,
            description: input.description,
            location: input.location,
            notification: input.notification,
            frequency: input.frequency,
            priority: input.priority,
            all_day: input.all_day,
            start_ts: input.start_ts,
            end_ts: input.end_ts,
        };
        self.base
            .post(
                body,
                format!("events/{}", input.calendar_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, calendar_id: ID, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(
                format!("events/{}/{}", calendar_id, event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        self.base
            .put(
                input.body,
                format!("events/{}/{}", input.calendar_id, input.event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(
        &self,
        calendar_id: ID,
        event_id: ID,
    ) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(
                format!("events/{}/{}", calendar_id, event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn calendar_occurrences(
        &self,
        calendar_id: ID,
        input: GetOccurrencesInput,
    ) -> APIResponse<get_calendar_occurrences::APIResponse> {
        self.base
            .get_with_query(
                format!("events/{}", calendar_id),
                &input.query(),
                StatusCode::OK,
            )
            .await
    }

    pub async fn my_occurrences(
        &self,
        input: GetOccurrencesInput,
    ) -> APIResponse<get_my_occurrences::APIResponse> {
        self.base
            .get_with_query("events/@me".into(), &input.query(), StatusCode::OK)
            .await
    }

    pub async fn groups_occurrences(
        &self,
        input: GetOccurrencesInput,
    ) -> APIResponse<get_groups_occurrences::APIResponse> {
        self.base
            .get_with_query("events/@groups".into(), &input.query(), StatusCode::OK)
            .await
    }

    pub async fn group_occurrences(
        &self,
        group_id: ID,
        input: GetOccurrencesInput,
    ) -> APIResponse<get_group_occurrences::APIResponse> {
        self.base
            .get_with_query(
                format!("events/groups/{}", group_id),
                &input.query(),
                StatusCode::OK,
            )
            .await
    }
}
