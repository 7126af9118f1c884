use super::IGroupRepo;
use crate::repos::shared::inmemory_repo::*;
use calenduh_domain::{Group, GroupMember, ID};

pub struct InMemoryGroupRepo {
    groups: std::sync::Mutex<Vec<Group>>,
    members: std::sync::Mutex<Vec<GroupMember>>,
}

impl InMemoryGroupRepo {
    pub fn new() -> Self {
        Self {
            groups: std::sync::Mutex::new(Vec::new()),
            members: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IGroupRepo for InMemoryGroupRepo {
    async fn insert(&self, group: &Group) -> anyhow::Result<()> {
        insert(group, &self.groups);
        Ok(())
    }

    async fn insert_member(&self, member: &GroupMember) -> anyhow::Result<()> {
        insert(member, &self.members);
        Ok(())
    }

    async fn find(&self, group_id: &ID) -> anyhow::Result<Option<Group>> {
        Ok(find(group_id, &self.groups))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Group>> {
        let group_ids = find_by(&self.members, |m| m.user_id == *user_id)
            .into_iter()
            .map(|m| m.group_id)
            .collect::<Vec<_>>();
        Ok(find_by(&self.groups, |g| group_ids.contains(&g.id)))
    }
}
