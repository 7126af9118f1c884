use super::ICalendarRepo;
use calenduh_domain::{Calendar, CalendarOwner, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresCalendarRepo {
    pool: PgPool,
}

impl PostgresCalendarRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CalendarRaw {
    calendar_uid: Uuid,
    owner_user_uid: Option<Uuid>,
    owner_group_uid: Option<Uuid>,
    title: String,
    color: String,
    is_public: bool,
    invite_code: Option<String>,
    created: i64,
}

impl TryFrom<CalendarRaw> for Calendar {
    type Error = anyhow::Error;

    fn try_from(c: CalendarRaw) -> Result<Self, Self::Error> {
        let owner = match (c.owner_user_uid, c.owner_group_uid) {
            (Some(user_uid), None) => CalendarOwner::User(user_uid.into()),
            (None, Some(group_uid)) => CalendarOwner::Group(group_uid.into()),
            _ => anyhow::bail!(
                "Calendar: {} must be owned by exactly one user or group",
                c.calendar_uid
            ),
        };
        Ok(Self {
            id: c.calendar_uid.into(),
            owner,
            title: c.title,
            color: c.color,
            is_public: c.is_public,
            invite_code: c.invite_code,
            created: c.created,
        })
    }
}

fn into_calendars(rows: Vec<CalendarRaw>) -> anyhow::Result<Vec<Calendar>> {
    rows.into_iter().map(Calendar::try_from).collect()
}

fn to_uuids(ids: &[ID]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.inner_ref()).collect()
}

#[async_trait::async_trait]
impl ICalendarRepo for PostgresCalendarRepo {
    async fn insert(&self, calendar: &Calendar) -> anyhow::Result<()> {
        let (owner_user_uid, owner_group_uid) = match calendar.owner {
            CalendarOwner::User(user_id) => (Some(*user_id.inner_ref()), None),
            CalendarOwner::Group(group_id) => (None, Some(*group_id.inner_ref())),
        };
        sqlx::query(
            r#"
            INSERT INTO calendars(
                calendar_uid,
                owner_user_uid,
                owner_group_uid,
                title,
                color,
                is_public,
                invite_code,
                created
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(*calendar.id.inner_ref())
        .bind(owner_user_uid)
        .bind(owner_group_uid)
        .bind(&calendar.title)
        .bind(&calendar.color)
        .bind(calendar.is_public)
        .bind(&calendar.invite_code)
        .bind(calendar.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, calendar_id: &ID) -> anyhow::Result<Option<Calendar>> {
        let calendar: Option<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars AS c
            WHERE c.calendar_uid = $1
            "#,
        )
        .bind(*calendar_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        calendar.map(Calendar::try_from).transpose()
    }

    async fn find_many(&self, calendar_ids: &[ID]) -> anyhow::Result<Vec<Calendar>> {
        let calendars: Vec<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars AS c
            WHERE c.calendar_uid = ANY($1)
            "#,
        )
        .bind(to_uuids(calendar_ids))
        .fetch_all(&self.pool)
        .await?;

        into_calendars(calendars)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Calendar>> {
        let calendars: Vec<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars AS c
            WHERE c.owner_user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        into_calendars(calendars)
    }

    async fn find_by_groups(&self, group_ids: &[ID]) -> anyhow::Result<Vec<Calendar>> {
        let calendars: Vec<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars AS c
            WHERE c.owner_group_uid = ANY($1)
            "#,
        )
        .bind(to_uuids(group_ids))
        .fetch_all(&self.pool)
        .await?;

        into_calendars(calendars)
    }

    async fn find_by_invite_code(&self, invite_code: &str) -> anyhow::Result<Option<Calendar>> {
        let calendar: Option<CalendarRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendars AS c
            WHERE c.invite_code = $1
            "#,
        )
        .bind(invite_code)
        .fetch_optional(&self.pool)
        .await?;

        calendar.map(Calendar::try_from).transpose()
    }

    async fn delete(&self, calendar_id: &ID) -> anyhow::Result<Option<Calendar>> {
        let calendar: Option<CalendarRaw> = sqlx::query_as(
            r#"
            DELETE FROM calendars AS c
            WHERE c.calendar_uid = $1
            RETURNING *
            "#,
        )
        .bind(*calendar_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        calendar.map(Calendar::try_from).transpose()
    }
}
