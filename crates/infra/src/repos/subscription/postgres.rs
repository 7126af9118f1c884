use super::ISubscriptionRepo;
use calenduh_domain::{Subscription, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresSubscriptionRepo {
    pool: PgPool,
}

impl PostgresSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRaw {
    user_uid: Uuid,
    calendar_uid: Uuid,
}

impl From<SubscriptionRaw> for Subscription {
    fn from(s: SubscriptionRaw) -> Self {
        Self {
            user_id: s.user_uid.into(),
            calendar_id: s.calendar_uid.into(),
        }
    }
}

#[async_trait::async_trait]
impl ISubscriptionRepo for PostgresSubscriptionRepo {
    async fn insert(&self, subscription: &Subscription) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions(user_uid, calendar_uid)
            VALUES($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(*subscription.user_id.inner_ref())
        .bind(*subscription.calendar_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn exists(&self, user_id: &ID, calendar_id: &ID) -> anyhow::Result<bool> {
        let subscription: Option<SubscriptionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM subscriptions AS s
            WHERE s.user_uid = $1 AND s.calendar_uid = $2
            "#,
        )
        .bind(*user_id.inner_ref())
        .bind(*calendar_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(subscription.is_some())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Subscription>> {
        let subscriptions: Vec<SubscriptionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM subscriptions AS s
            WHERE s.user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(subscriptions.into_iter().map(|s| s.into()).collect())
    }

    async fn delete(&self, user_id: &ID, calendar_id: &ID) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            DELETE FROM subscriptions AS s
            WHERE s.user_uid = $1 AND s.calendar_uid = $2
            "#,
        )
        .bind(*user_id.inner_ref())
        .bind(*calendar_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn delete_by_calendar(&self, calendar_id: &ID) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            DELETE FROM subscriptions AS s
            WHERE s.calendar_uid = $1
            "#,
        )
        .bind(*calendar_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }
}
