use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Group {
    pub id: ID,
    pub name: String,
    pub created: i64,
}

impl Group {
    pub fn new(name: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            name,
            created,
        }
    }
}

impl Entity for Group {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub group_id: ID,
    pub user_id: ID,
}
