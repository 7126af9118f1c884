mod inmemory;
mod postgres;

use calenduh_domain::{Calendar, ID};
pub use inmemory::InMemoryCalendarRepo;
pub use postgres::PostgresCalendarRepo;

#[async_trait::async_trait]
pub trait ICalendarRepo: Send + Sync {
    async fn insert(&self, calendar: &Calendar) -> anyhow::Result<()>;
    async fn find(&self, calendar_id: &ID) -> anyhow::Result<Option<Calendar>>;
    async fn find_many(&self, calendar_ids: &[ID]) -> anyhow::Result<Vec<Calendar>>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Calendar>>;
    async fn find_by_groups(&self, group_ids: &[ID]) -> anyhow::Result<Vec<Calendar>>;
    async fn find_by_invite_code(&self, invite_code: &str) -> anyhow::Result<Option<Calendar>>;
    async fn delete(&self, calendar_id: &ID) -> anyhow::Result<Option<Calendar>>;
}
