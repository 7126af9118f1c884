use super::IGroupRepo;
use calenduh_domain::{Group, GroupMember, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresGroupRepo {
    pool: PgPool,
}

impl PostgresGroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRaw {
    group_uid: Uuid,
    name: String,
    created: i64,
}

impl From<GroupRaw> for Group {
    fn from(g: GroupRaw) -> Self {
        Self {
            id: g.group_uid.into(),
            name: g.name,
            created: g.created,
        }
    }
}

#[async_trait::async_trait]
impl IGroupRepo for PostgresGroupRepo {
    async fn insert(&self, group: &Group) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO groups(group_uid, name, created)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(*group.id.inner_ref())
        .bind(&group.name)
        .bind(group.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_member(&self, member: &GroupMember) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_members(group_uid, user_uid)
            VALUES($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(*member.group_id.inner_ref())
        .bind(*member.user_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, group_id: &ID) -> anyhow::Result<Option<Group>> {
        let group: Option<GroupRaw> = sqlx::query_as(
            r#"
            SELECT * FROM groups AS g
            WHERE g.group_uid = $1
            "#,
        )
        .bind(*group_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(group.map(|g| g.into()))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Group>> {
        let groups: Vec<GroupRaw> = sqlx::query_as(
            r#"
            SELECT g.* FROM groups AS g
            INNER JOIN group_members AS m
                ON m.group_uid = g.group_uid
            WHERE m.user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(groups.into_iter().map(|g| g.into()).collect())
    }
}
