use crate::dtos::{GroupDTO, UserDTO};
use calenduh_domain::{Group, User};
use serde::{Deserialize, Serialize};

pub mod get_me {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user: UserDTO,
        pub groups: Vec<GroupDTO>,
    }

    impl APIResponse {
        pub fn new(user: User, groups: Vec<Group>) -> Self {
            Self {
                user: UserDTO::new(user),
                groups: groups.into_iter().map(GroupDTO::new).collect(),
            }
        }
    }
}
