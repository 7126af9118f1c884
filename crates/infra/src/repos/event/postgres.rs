use super::IEventRepo;
use calenduh_domain::{CalendarEvent, TimeWindow, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    calendar_uid: Uuid,
    name: String,
    description: Option<String>,
    location: Option<String>,
    notification: Option<String>,
    frequency: Option<String>,
    priority: i32,
    all_day: bool,
    start_ts: i64,
    end_ts: i64,
    created: i64,
    updated: i64,
}

impl From<EventRaw> for CalendarEvent {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            calendar_id: e.calendar_uid.into(),
            name: e.name,
            description: e.description,
            location: e.location,
            notification: e.notification,
            frequency: e.frequency,
            priority: e.priority,
            all_day: e.all_day,
            start_ts: e.start_ts,
            end_ts: e.end_ts,
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO calendar_events(
                event_uid,
                calendar_uid,
                name,
                description,
                location,
                notification,
                frequency,
                priority,
                all_day,
                start_ts,
                end_ts,
                created,
                updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(*e.id.inner_ref())
        .bind(*e.calendar_id.inner_ref())
        .bind(&e.name)
        .bind(&e.description)
        .bind(&e.location)
        .bind(&e.notification)
        .bind(&e.frequency)
        .bind(e.priority)
        .bind(e.all_day)
        .bind(e.start_ts)
        .bind(e.end_ts)
        .bind(e.created)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE calendar_events SET
                name = $2,
                description = $3,
                location = $4,
                notification = $5,
                frequency = $6,
                priority = $7,
                all_day = $8,
                start_ts = $9,
                end_ts = $10,
                updated = $11
            WHERE event_uid = $1
            "#,
        )
        .bind(*e.id.inner_ref())
        .bind(&e.name)
        .bind(&e.description)
        .bind(&e.location)
        .bind(&e.notification)
        .bind(&e.frequency)
        .bind(e.priority)
        .bind(e.all_day)
        .bind(e.start_ts)
        .bind(e.end_ts)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>> {
        let event: Option<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendar_events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(*event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event.map(|e| e.into()))
    }

    async fn find_for_expansion(
        &self,
        calendar_ids: &[ID],
        window: &TimeWindow,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let ids = calendar_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect::<Vec<_>>();
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendar_events AS e
            WHERE e.calendar_uid = ANY($1) AND (
                (e.start_ts <= $3 AND e.end_ts >= $2)
                OR COALESCE(TRIM(e.frequency), '') <> ''
            )
            ORDER BY e.created, e.event_uid
            "#,
        )
        .bind(&ids)
        .bind(window.start())
        .bind(window.end())
        .fetch_all(&self.pool)
        .await?;

        Ok(events.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>> {
        let event: Option<EventRaw> = sqlx::query_as(
            r#"
            DELETE FROM calendar_events AS e
            WHERE e.event_uid = $1
            RETURNING *
            "#,
        )
        .bind(*event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event.map(|e| e.into()))
    }

    async fn delete_by_calendar(&self, calendar_id: &ID) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            DELETE FROM calendar_events AS e
            WHERE e.calendar_uid = $1
            "#,
        )
        .bind(*calendar_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }
}
