use crate::dtos::SubscriptionDTO;
use calenduh_domain::{Subscription, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub subscription: SubscriptionDTO,
}

impl SubscriptionResponse {
    pub fn new(subscription: Subscription) -> Self {
        Self {
            subscription: SubscriptionDTO::new(subscription),
        }
    }
}

pub mod subscribe {
    use super::*;

    /// Either the calendar id or its invite code must be given
    #[derive(Debug, Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub calendar_id: Option<ID>,
        pub invite_code: Option<String>,
    }

    pub type APIResponse = SubscriptionResponse;
}

pub mod unsubscribe {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub calendar_id: ID,
    }

    pub type APIResponse = SubscriptionResponse;
}
