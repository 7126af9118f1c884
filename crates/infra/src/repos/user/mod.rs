mod inmemory;
mod postgres;

use calenduh_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_by_id_and_username() {
        let repo = InMemoryUserRepo::new();
        let user = User::new("alice".into(), Some("alice@example.com".into()), 0);
        assert!(repo.insert(&user).await.is_ok());

        assert_eq!(
            repo.find(&user.id).await.unwrap().map(|u| u.username),
            Some("alice".to_string())
        );
        assert_eq!(
            repo.find_by_username("alice").await.unwrap().map(|u| u.id),
            Some(user.id)
        );
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }
}
