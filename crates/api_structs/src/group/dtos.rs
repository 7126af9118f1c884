use calenduh_domain::{Group, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GroupDTO {
    pub id: ID,
    pub name: String,
    pub created: i64,
}

impl GroupDTO {
    pub fn new(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            created: group.created,
        }
    }
}
