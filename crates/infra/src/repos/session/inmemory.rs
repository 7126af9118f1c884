use super::ISessionRepo;
use crate::repos::shared::inmemory_repo::*;
use calenduh_domain::Session;

pub struct InMemorySessionRepo {
    sessions: std::sync::Mutex<Vec<Session>>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self {
            sessions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISessionRepo for InMemorySessionRepo {
    async fn insert(&self, session: &Session) -> anyhow::Result<()> {
        insert(session, &self.sessions);
        Ok(())
    }

    async fn find(&self, session_id: &str) -> anyhow::Result<Option<Session>> {
        let mut sessions = find_by(&self.sessions, |s| s.id == session_id);
        Ok(sessions.pop())
    }

    async fn delete(&self, session_id: &str) -> anyhow::Result<Option<Session>> {
        let mut deleted = find_and_delete_by(&self.sessions, |s| s.id == session_id);
        Ok(deleted.pop())
    }
}
