use super::ISubscriptionRepo;
use crate::repos::shared::inmemory_repo::*;
use calenduh_domain::{Subscription, ID};

pub struct InMemorySubscriptionRepo {
    subscriptions: std::sync::Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionRepo {
    pub fn new() -> Self {
        Self {
            subscriptions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISubscriptionRepo for InMemorySubscriptionRepo {
    async fn insert(&self, subscription: &Subscription) -> anyhow::Result<()> {
        if !self
            .exists(&subscription.user_id, &subscription.calendar_id)
            .await?
        {
            insert(subscription, &self.subscriptions);
        }
        Ok(())
    }

    async fn exists(&self, user_id: &ID, calendar_id: &ID) -> anyhow::Result<bool> {
        let found = find_by(&self.subscriptions, |s| {
            s.user_id == *user_id && s.calendar_id == *calendar_id
        });
        Ok(!found.is_empty())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Subscription>> {
        Ok(find_by(&self.subscriptions, |s| s.user_id == *user_id))
    }

    async fn delete(&self, user_id: &ID, calendar_id: &ID) -> anyhow::Result<bool> {
        let deleted = find_and_delete_by(&self.subscriptions, |s| {
            s.user_id == *user_id && s.calendar_id == *calendar_id
        });
        Ok(!deleted.is_empty())
    }

    async fn delete_by_calendar(&self, calendar_id: &ID) -> anyhow::Result<u64> {
        let deleted = find_and_delete_by(&self.subscriptions, |s| s.calendar_id == *calendar_id);
        Ok(deleted.len() as u64)
    }
}
