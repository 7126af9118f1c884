mod inmemory;
mod postgres;

use calenduh_domain::{Subscription, ID};
pub use inmemory::InMemorySubscriptionRepo;
pub use postgres::PostgresSubscriptionRepo;

#[async_trait::async_trait]
pub trait ISubscriptionRepo: Send + Sync {
    /// Subscribing twice to the same calendar is a no-op
    async fn insert(&self, subscription: &Subscription) -> anyhow::Result<()>;
    async fn exists(&self, user_id: &ID, calendar_id: &ID) -> anyhow::Result<bool>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Subscription>>;
    /// Returns whether a subscription was removed
    async fn delete(&self, user_id: &ID, calendar_id: &ID) -> anyhow::Result<bool>;
    async fn delete_by_calendar(&self, calendar_id: &ID) -> anyhow::Result<u64>;
}
