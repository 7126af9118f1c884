use crate::{APIResponse, BaseClient};
use calenduh_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("users/@me".into(), StatusCode::OK).await
    }
}
