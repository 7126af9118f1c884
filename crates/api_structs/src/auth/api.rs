use crate::dtos::{SessionDTO, UserDTO};
use calenduh_domain::{Session, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session: SessionDTO,
    pub user: UserDTO,
}

impl SessionResponse {
    pub fn new(session: Session, user: User) -> Self {
        Self {
            session: SessionDTO::new(session),
            user: UserDTO::new(user),
        }
    }
}

pub mod register {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
        pub email: Option<String>,
    }

    pub type APIResponse = SessionResponse;
}

pub mod login {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
    }

    pub type APIResponse = SessionResponse;
}

pub mod logout {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub session: SessionDTO,
    }

    impl APIResponse {
        pub fn new(session: Session) -> Self {
            Self {
                session: SessionDTO::new(session),
            }
        }
    }
}
