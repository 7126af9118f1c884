use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use calenduh_domain::{CalendarEvent, TimeWindow, ID};

pub struct InMemoryEventRepo {
    calendar_events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            calendar_events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        insert(e, &self.calendar_events);
        Ok(())
    }

    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        save(e, &self.calendar_events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>> {
        Ok(find(event_id, &self.calendar_events))
    }

    async fn find_for_expansion(
        &self,
        calendar_ids: &[ID],
        window: &TimeWindow,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let res = find_by(&self.calendar_events, |event| {
            calendar_ids.contains(&event.calendar_id)
                && (event.is_recurring()
                    || (event.start_ts <= window.end() && event.end_ts >= window.start()))
        });
        Ok(res)
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>> {
        Ok(delete(event_id, &self.calendar_events))
    }

    async fn delete_by_calendar(&self, calendar_id: &ID) -> anyhow::Result<u64> {
        let deleted = find_and_delete_by(&self.calendar_events, |event| {
            event.calendar_id == *calendar_id
        });
        Ok(deleted.len() as u64)
    }
}
