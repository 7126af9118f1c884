use super::ICalendarRepo;
use crate::repos::shared::inmemory_repo::*;
use calenduh_domain::{Calendar, ID};

pub struct InMemoryCalendarRepo {
    calendars: std::sync::Mutex<Vec<Calendar>>,
}

impl InMemoryCalendarRepo {
    pub fn new() -> Self {
        Self {
            calendars: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICalendarRepo for InMemoryCalendarRepo {
    async fn insert(&self, calendar: &Calendar) -> anyhow::Result<()> {
        insert(calendar, &self.calendars);
        Ok(())
    }

    async fn find(&self, calendar_id: &ID) -> anyhow::Result<Option<Calendar>> {
        Ok(find(calendar_id, &self.calendars))
    }

    async fn find_many(&self, calendar_ids: &[ID]) -> anyhow::Result<Vec<Calendar>> {
        Ok(find_by(&self.calendars, |cal| calendar_ids.contains(&cal.id)))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Calendar>> {
        Ok(find_by(&self.calendars, |cal| cal.owned_by_user(user_id)))
    }

    async fn find_by_groups(&self, group_ids: &[ID]) -> anyhow::Result<Vec<Calendar>> {
        Ok(find_by(&self.calendars, |cal| cal.owned_by_any_group(group_ids)))
    }

    async fn find_by_invite_code(&self, invite_code: &str) -> anyhow::Result<Option<Calendar>> {
        let mut calendars = find_by(&self.calendars, |cal| {
            cal.invite_code.as_deref() == Some(invite_code)
        });
        Ok(calendars.pop())
    }

    async fn delete(&self, calendar_id: &ID) -> anyhow::Result<Option<Calendar>> {
        Ok(delete(calendar_id, &self.calendars))
    }
}
