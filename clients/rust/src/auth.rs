use crate::{APIResponse, BaseClient};
use calenduh_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthClient {
    base: Arc<BaseClient>,
}

pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl AuthClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(&self, input: RegisterInput) -> APIResponse<register::APIResponse> {
        let body = register::RequestBody {
            username: input.username,
            password: input.password,
            email: input.email,
        };
        self.base
            .post(body, "auth/local/register".into(), StatusCode::CREATED)
            .await
    }

    pub async fn login(&self, input: LoginInput) -> APIResponse<login::APIResponse> {
        let body = login::RequestBody {
            username: input.username,
            password: input.password,
        };
        self.base
            .post(body, "auth/local/login".into(), StatusCode::OK)
            .await
    }

    pub async fn logout(&self) -> APIResponse<logout::APIResponse> {
        self.base
            .post((), "auth/logout".into(), StatusCode::OK)
            .await
    }
}
