mod calendar;
mod event;
mod group;
mod session;
mod shared;
mod subscription;
mod user;

use calendar::{ICalendarRepo, InMemoryCalendarRepo, PostgresCalendarRepo};
use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
use group::{IGroupRepo, InMemoryGroupRepo, PostgresGroupRepo};
use session::{ISessionRepo, InMemorySessionRepo, PostgresSessionRepo};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use subscription::{ISubscriptionRepo, InMemorySubscriptionRepo, PostgresSubscriptionRepo};
use tracing::info;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub calendars: Arc<dyn ICalendarRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub sessions: Arc<dyn ISessionRepo>,
    pub groups: Arc<dyn IGroupRepo>,
    pub subscriptions: Arc<dyn ISubscriptionRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self::from_pool(pool))
    }

    fn from_pool(pool: PgPool) -> Self {
        Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            calendars: Arc::new(PostgresCalendarRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            sessions: Arc::new(PostgresSessionRepo::new(pool.clone())),
            groups: Arc::new(PostgresGroupRepo::new(pool.clone())),
            subscriptions: Arc::new(PostgresSubscriptionRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            calendars: Arc::new(InMemoryCalendarRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            sessions: Arc::new(InMemorySessionRepo::new()),
            groups: Arc::new(InMemoryGroupRepo::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepo::new()),
        }
    }
}
