use crate::{APIResponse, BaseClient};
use calenduh_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct GroupClient {
    base: Arc<BaseClient>,
}

impl GroupClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn mine(&self) -> APIResponse<get_my_groups::APIResponse> {
        self.base.get("groups/@me".into(), StatusCode::OK).await
    }
}
