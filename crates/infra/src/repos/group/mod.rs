mod inmemory;
mod postgres;

use calenduh_domain::{Group, GroupMember, ID};
pub use inmemory::InMemoryGroupRepo;
pub use postgres::PostgresGroupRepo;

#[async_trait::async_trait]
pub trait IGroupRepo: Send + Sync {
    async fn insert(&self, group: &Group) -> anyhow::Result<()>;
    async fn insert_member(&self, member: &GroupMember) -> anyhow::Result<()>;
    async fn find(&self, group_id: &ID) -> anyhow::Result<Option<Group>>;
    /// Groups the user is a member of
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Group>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_groups_of_member() {
        let repo = InMemoryGroupRepo::new();
        let user_id = ID::new();
        let joined = Group::new("Joined".into(), 0);
        let other = Group::new("Other".into(), 0);
        repo.insert(&joined).await.unwrap();
        repo.insert(&other).await.unwrap();
        repo.insert_member(&GroupMember {
            group_id: joined.id,
            user_id,
        })
        .await
        .unwrap();
        repo.insert_member(&GroupMember {
            group_id: other.id,
            user_id: ID::new(),
        })
        .await
        .unwrap();

        let groups = repo.find_by_user(&user_id).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, joined.id);
        assert!(repo.find(&other.id).await.unwrap().is_some());
        assert!(repo.find_by_user(&ID::new()).await.unwrap().is_empty());
    }
}
