use crate::shared::entity::ID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub user_id: ID,
    pub calendar_id: ID,
}
