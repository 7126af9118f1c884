use crate::{APIResponse, BaseClient};
use calenduh_api_structs::*;
use calenduh_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarClient {
    base: Arc<BaseClient>,
}

pub struct CreateCalendarInput {
    pub title: String,
    pub color: Option<String>,
    pub is_public: Option<bool>,
}

impl From<CreateCalendarInput> for CreateCalendarBody {
    fn from(input: CreateCalendarInput) -> Self {
        Self {
            title: input.title,
            color: input.color,
            is_public: input.is_public,
        }
    }
}

impl CalendarClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateCalendarInput,
    ) -> APIResponse<create_calendar::APIResponse> {
        let body: create_calendar::RequestBody = input.into();
        self.base
            .post(body, "calendars/@me".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_for_group(
        &self,
        group_id: ID,
        input: CreateCalendarInput,
    ) -> APIResponse<create_group_calendar::APIResponse> {
        let body: create_group_calendar::RequestBody = input.into();
        self.base
            .post(
                body,
                format!("calendars/groups/{}", group_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn mine(&self) -> APIResponse<get_my_calendars::APIResponse> {
        self.base.get("calendars/@me".into(), StatusCode::OK).await
    }

    pub async fn subscribed(&self) -> APIResponse<get_subscribed_calendars::APIResponse> {
        self.base
            .get("calendars/@subscribed".into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self, calendar_id: ID) -> APIResponse<get_calendar::APIResponse> {
        self.base
            .get(format!("calendars/{}", calendar_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, calendar_id: ID) -> APIResponse<delete_calendar::APIResponse> {
        self.base
            .delete(format!("calendars/{}", calendar_id), StatusCode::OK)
            .await
    }
}
