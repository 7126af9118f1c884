use calenduh_domain::{Subscription, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDTO {
    pub user_id: ID,
    pub calendar_id: ID,
}

impl SubscriptionDTO {
    pub fn new(subscription: Subscription) -> Self {
        Self {
            user_id: subscription.user_id,
            calendar_id: subscription.calendar_id,
        }
    }
}
