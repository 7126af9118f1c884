use crate::{APIResponse, BaseClient};
use calenduh_api_structs::*;
use calenduh_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SubscriptionClient {
    base: Arc<BaseClient>,
}

pub enum SubscribeInput {
    Calendar(ID),
    InviteCode(String),
}

impl SubscriptionClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn subscribe(&self, input: SubscribeInput) -> APIResponse<subscribe::APIResponse> {
        let body = match input {
            SubscribeInput::Calendar(calendar_id) => subscribe::RequestBody {
                calendar_id: Some(calendar_id),
                invite_code: None,
            },
            SubscribeInput::InviteCode(code) => subscribe::RequestBody {
                calendar_id: None,
                invite_code: Some(code),
            },
        };
        self.base
            .post(body, "subscriptions".into(), StatusCode::CREATED)
            .await
    }

    pub async fn unsubscribe(&self, calendar_id: ID) -> APIResponse<unsubscribe::APIResponse> {
        self.base
            .delete(
                format!("subscriptions/@me/{}", calendar_id),
                StatusCode::OK,
            )
            .await
    }
}
