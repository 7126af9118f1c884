use super::ISessionRepo;
use calenduh_domain::Session;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresSessionRepo {
    pool: PgPool,
}

impl PostgresSessionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionRaw {
    session_id: String,
    user_uid: Uuid,
    kind: String,
    expires_ts: i64,
}

impl TryFrom<SessionRaw> for Session {
    type Error = anyhow::Error;

    fn try_from(s: SessionRaw) -> Result<Self, Self::Error> {
        let kind = s.kind.parse().map_err(anyhow::Error::msg)?;
        Ok(Self {
            id: s.session_id,
            user_id: s.user_uid.into(),
            kind,
            expires_ts: s.expires_ts,
        })
    }
}

#[async_trait::async_trait]
impl ISessionRepo for PostgresSessionRepo {
    async fn insert(&self, session: &Session) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions(session_id, user_uid, kind, expires_ts)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(&session.id)
        .bind(*session.user_id.inner_ref())
        .bind(session.kind.to_string())
        .bind(session.expires_ts)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, session_id: &str) -> anyhow::Result<Option<Session>> {
        let session: Option<SessionRaw> = sqlx::query_as(
            r#"
            SELECT * FROM sessions AS s
            WHERE s.session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        session.map(Session::try_from).transpose()
    }

    async fn delete(&self, session_id: &str) -> anyhow::Result<Option<Session>> {
        let session: Option<SessionRaw> = sqlx::query_as(
            r#"
            DELETE FROM sessions AS s
            WHERE s.session_id = $1
            RETURNING *
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        session.map(Session::try_from).transpose()
    }
}
