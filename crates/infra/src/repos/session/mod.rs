mod inmemory;
mod postgres;

use calenduh_domain::Session;
pub use inmemory::InMemorySessionRepo;
pub use postgres::PostgresSessionRepo;

#[async_trait::async_trait]
pub trait ISessionRepo: Send + Sync {
    async fn insert(&self, session: &Session) -> anyhow::Result<()>;
    async fn find(&self, session_id: &str) -> anyhow::Result<Option<Session>>;
    async fn delete(&self, session_id: &str) -> anyhow::Result<Option<Session>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use calenduh_domain::{SessionKind, ID};

    #[tokio::test]
    async fn create_find_and_delete() {
        let repo = InMemorySessionRepo::new();
        let user_id = ID::new();
        let session = Session::new("token-1".into(), user_id, SessionKind::Local, 100);
        repo.insert(&session).await.unwrap();

        assert_eq!(
            repo.find("token-1").await.unwrap().map(|s| s.user_id),
            Some(user_id)
        );
        assert!(repo.delete("token-1").await.unwrap().is_some());
        assert!(repo.find("token-1").await.unwrap().is_none());
        assert!(repo.delete("token-1").await.unwrap().is_none());
    }
}
