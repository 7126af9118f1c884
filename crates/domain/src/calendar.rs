use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarOwner {
    User(ID),
    Group(ID),
}

#[derive(Debug, Clone)]
pub struct Calendar {
    pub id: ID,
    pub owner: CalendarOwner,
    pub title: String,
    pub color: String,
    pub is_public: bool,
    /// Lets users subscribe without knowing the calendar id
    pub invite_code: Option<String>,
    pub created: i64,
}

impl Calendar {
    pub fn new(owner: CalendarOwner, title: String, color: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            owner,
            title,
            color,
            is_public: false,
            invite_code: None,
            created,
        }
    }

    pub fn owned_by_user(&self, user_id: &ID) -> bool {
        matches!(self.owner, CalendarOwner::User(id) if &id == user_id)
    }

    pub fn owned_by_any_group(&self, group_ids: &[ID]) -> bool {
        matches!(self.owner, CalendarOwner::Group(id) if group_ids.contains(&id))
    }

    /// Owners and members of the owning group may change the calendar and its events
    pub fn can_edit(&self, user_id: &ID, group_ids: &[ID]) -> bool {
        self.owned_by_user(user_id) || self.owned_by_any_group(group_ids)
    }

    pub fn can_read(&self, user_id: &ID, group_ids: &[ID], is_subscribed: bool) -> bool {
        self.is_public || is_subscribed || self.can_edit(user_id, group_ids)
    }
}

impl Entity for Calendar {
    fn id(&self) -> &ID {
        &self.id
    }
}
