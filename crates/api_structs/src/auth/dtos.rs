use calenduh_domain::{Session, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionDTO {
    pub session_id: String,
    pub user_id: ID,
    pub kind: String,
    pub expires_ts: i64,
}

impl SessionDTO {
    pub fn new(session: Session) -> Self {
        Self {
            session_id: session.id,
            user_id: session.user_id,
            kind: session.kind.to_string(),
            expires_ts: session.expires_ts,
        }
    }
}
