use crate::dtos::GroupDTO;
use calenduh_domain::Group;
use serde::{Deserialize, Serialize};

pub mod get_my_groups {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub groups: Vec<GroupDTO>,
    }

    impl APIResponse {
        pub fn new(groups: Vec<Group>) -> Self {
            Self {
                groups: groups.into_iter().map(GroupDTO::new).collect(),
            }
        }
    }
}
