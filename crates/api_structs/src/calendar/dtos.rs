use calenduh_domain::{Calendar, CalendarOwner, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDTO {
    pub id: ID,
    pub owner_user_id: Option<ID>,
    pub owner_group_id: Option<ID>,
    pub title: String,
    pub color: String,
    pub is_public: bool,
    pub invite_code: Option<String>,
    pub created: i64,
}

impl CalendarDTO {
    pub fn new(calendar: Calendar) -> Self {
        let (owner_user_id, owner_group_id) = match calendar.owner {
            CalendarOwner::User(user_id) => (Some(user_id), None),
            CalendarOwner::Group(group_id) => (None, Some(group_id)),
        };
        Self {
            id: calendar.id,
            owner_user_id,
            owner_group_id,
            title: calendar.title,
            color: calendar.color,
            is_public: calendar.is_public,
            invite_code: calendar.invite_code,
            created: calendar.created,
        }
    }
}
