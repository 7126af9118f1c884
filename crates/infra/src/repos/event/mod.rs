mod inmemory;
mod postgres;

use calenduh_domain::{CalendarEvent, TimeWindow, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &CalendarEvent) -> anyhow::Result<()>;
    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>>;
    /// Events in the given calendars that could produce an occurrence inside
    /// `window`: the stored interval overlaps the window or the event recurs
    ///
    /// Returned in insertion order so that equal starts expand deterministically
    async fn find_for_expansion(
        &self,
        calendar_ids: &[ID],
        window: &TimeWindow,
    ) -> anyhow::Result<Vec<CalendarEvent>>;
    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<CalendarEvent>>;
    async fn delete_by_calendar(&self, calendar_id: &ID) -> anyhow::Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_event(calendar_id: &ID, start_ts: i64, end_ts: i64) -> CalendarEvent {
        CalendarEvent {
            id: Default::default(),
            calendar_id: *calendar_id,
            name: "Event".into(),
            description: None,
            location: None,
            notification: None,
            frequency: None,
            priority: 0,
            all_day: false,
            start_ts,
            end_ts,
            created: 0,
            updated: 0,
        }
    }

    #[tokio::test]
    async fn create_update_and_delete() {
        let repo = InMemoryEventRepo::new();
        let mut event = generate_event(&ID::new(), 10, 20);

        assert!(repo.insert(&event).await.is_ok());
        assert_eq!(repo.find(&event.id).await.unwrap(), Some(event.clone()));

        event.name = "Renamed".into();
        assert!(repo.save(&event).await.is_ok());
        assert_eq!(
            repo.find(&event.id).await.unwrap().map(|e| e.name),
            Some("Renamed".to_string())
        );

        assert_eq!(repo.delete(&event.id).await.unwrap(), Some(event.clone()));
        assert!(repo.find(&event.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn finds_overlapping_and_recurring_events() {
        let repo = InMemoryEventRepo::new();
        let calendar_id = ID::new();
        let other_calendar_id = ID::new();

        let before = generate_event(&calendar_id, 0, 50);
        let overlapping_start = generate_event(&calendar_id, 90, 110);
        let inside = generate_event(&calendar_id, 120, 130);
        let after = generate_event(&calendar_id, 300, 400);
        let mut recurring_before = generate_event(&calendar_id, 0, 10);
        recurring_before.frequency = Some("0 0 * * *".into());
        let in_other_calendar = generate_event(&other_calendar_id, 120, 130);

        for e in [
            &before,
            &overlapping_start,
            &inside,
            &after,
            &recurring_before,
            &in_other_calendar,
        ] {
            repo.insert(e).await.unwrap();
        }

        let window = TimeWindow::new(100, 200).unwrap();
        let found = repo
            .find_for_expansion(&[calendar_id], &window)
            .await
            .unwrap();
        let mut found_ids = found.iter().map(|e| e.id).collect::<Vec<_>>();
        found_ids.sort();
        let mut expected = vec![overlapping_start.id, inside.id, recurring_before.id];
        expected.sort();
        assert_eq!(found_ids, expected);
    }

    #[tokio::test]
    async fn returns_events_with_equal_starts_in_insertion_order() {
        let repo = InMemoryEventRepo::new();
        let calendar_id = ID::new();
        let mut events = Vec::new();
        for created in 1..=3 {
            let mut event = generate_event(&calendar_id, 100, 150);
            event.created = created;
            repo.insert(&event).await.unwrap();
            events.push(event);
        }
        // Updating an event must not move it
        events[0].name = "Renamed".into();
        repo.save(&events[0]).await.unwrap();

        let window = TimeWindow::new(0, 200).unwrap();
        for _ in 0..2 {
            let found = repo
                .find_for_expansion(&[calendar_id], &window)
                .await
                .unwrap();
            assert_eq!(
                found.iter().map(|e| e.id).collect::<Vec<_>>(),
                events.iter().map(|e| e.id).collect::<Vec<_>>()
            );
        }
    }

    #[tokio::test]
    async fn deletes_by_calendar() {
        let repo = InMemoryEventRepo::new();
        let calendar_id = ID::new();
        let kept = generate_event(&ID::new(), 0, 10);
        repo.insert(&generate_event(&calendar_id, 0, 10)).await.unwrap();
        repo.insert(&generate_event(&calendar_id, 5, 10)).await.unwrap();
        repo.insert(&kept).await.unwrap();

        assert_eq!(repo.delete_by_calendar(&calendar_id).await.unwrap(), 2);
        assert!(repo.find(&kept.id).await.unwrap().is_some());
    }
}
