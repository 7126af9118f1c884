use super::IUserRepo;
use calenduh_domain::{User, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    username: String,
    email: Option<String>,
    password_hash: Option<String>,
    created: i64,
}

impl From<UserRaw> for User {
    fn from(u: UserRaw) -> Self {
        Self {
            id: u.user_uid.into(),
            username: u.username,
            email: u.email,
            password_hash: u.password_hash,
            created: u.created,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, username, email, password_hash, created)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*user.id.inner_ref())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        let user: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|u| u.into()))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let user: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|u| u.into()))
    }
}
