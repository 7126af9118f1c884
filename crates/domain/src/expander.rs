use crate::{
    event::CalendarEvent,
    occurrence::{CapScope, Occurrence, OccurrenceCap, OccurrenceGenerator},
    shared::{entity::ID, recurrence::InvalidRecurrenceRuleError},
    window::TimeWindow,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpansionError {
    #[error("Event: {event_id} has an invalid recurrence rule: {source}")]
    InvalidRecurrenceRule {
        event_id: ID,
        source: InvalidRecurrenceRuleError,
    },
    #[error("Expansion was cancelled")]
    Cancelled,
}

/// Expands a collection of events into one time ordered list of occurrences.
///
/// Every event contributes its stored instance when it starts strictly
/// inside the window, and recurring events additionally contribute what
/// `OccurrenceGenerator` produces for them. A single invalid recurrence
/// rule fails the whole expansion.
#[derive(Debug, Clone, Default)]
pub struct EventSetExpander {
    cap: OccurrenceCap,
}

impl EventSetExpander {
    pub fn new(cap: OccurrenceCap) -> Self {
        Self { cap }
    }

    pub fn expand(
        &self,
        events: &[CalendarEvent],
        window: &TimeWindow,
    ) -> Result<Vec<Occurrence>, ExpansionError> {
        self.expand_until_cancelled(events, window, || false)
    }

    /// Same as `expand` but polls `is_cancelled` before every event and
    /// gives up with `ExpansionError::Cancelled` once it returns true
    pub fn expand_until_cancelled(
        &self,
        events: &[CalendarEvent],
        window: &TimeWindow,
        is_cancelled: impl Fn() -> bool,
    ) -> Result<Vec<Occurrence>, ExpansionError> {
        let mut occurrences = events
            .iter()
            .filter(|e| window.contains_strictly(e.start_ts))
            .map(Occurrence::base)
            .collect::<Vec<_>>();

        let mut remaining = self.cap.limit;
        for event in events.iter().filter(|e| e.is_recurring()) {
            if is_cancelled() {
                return Err(ExpansionError::Cancelled);
            }
            let limit = match self.cap.scope {
                CapScope::PerEvent => self.cap.limit,
                CapScope::PerResultSet => remaining,
            };
            let generated = OccurrenceGenerator::generate(event, window, limit).map_err(
                |source| ExpansionError::InvalidRecurrenceRule {
                    event_id: event.id,
                    source,
                },
            )?;
            remaining = remaining.saturating_sub(generated.len());
            occurrences.extend(generated);
        }

        occurrences.sort_by_key(|o| o.start_ts);
        Ok(occurrences)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::test_helpers::event;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;

    const HOUR: i64 = 1000 * 60 * 60;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn january() -> TimeWindow {
        TimeWindow::new(ts(2025, 1, 1, 0), ts(2025, 2, 1, 0)).unwrap()
    }

    #[test]
    fn non_recurring_event_inside_window_is_returned_unchanged() {
        let e = event(ts(2025, 1, 10, 8), ts(2025, 1, 10, 9), None);
        let occurrences = EventSetExpander::default()
            .expand(&[e.clone()], &january())
            .unwrap();
        assert_eq!(occurrences, vec![Occurrence::base(&e)]);
    }

    #[test]
    fn base_instance_at_window_start_is_excluded() {
        let e = event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 1), None);
        assert!(EventSetExpander::default()
            .expand(&[e], &january())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn daily_midnight_example() {
        let e = event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 1), Some("0 0 * * *"));
        let window = TimeWindow::new(ts(2025, 1, 1, 0) + HOUR / 2, ts(2025, 1, 4, 0)).unwrap();
        let occurrences = EventSetExpander::default().expand(&[e], &window).unwrap();
        let starts = occurrences.iter().map(|o| o.start_ts).collect::<Vec<_>>();
        assert_eq!(starts, vec![ts(2025, 1, 2, 0), ts(2025, 1, 3, 0)]);
    }

    #[test]
    fn merged_result_is_sorted_by_start() {
        let events = vec![
            event(ts(2025, 1, 20, 12), ts(2025, 1, 20, 13), None),
            event(ts(2025, 1, 1, 6), ts(2025, 1, 1, 7), Some("0 6 * * 1")),
            event(ts(2025, 1, 3, 12), ts(2025, 1, 3, 14), None),
            event(ts(2025, 1, 2, 18), ts(2025, 1, 2, 19), Some("0 18 1,15 * *")),
        ];
        let occurrences = EventSetExpander::default()
            .expand(&events, &january())
            .unwrap();

        assert!(occurrences.len() > events.len());
        assert!(occurrences
            .windows(2)
            .all(|pair| pair[0].start_ts <= pair[1].start_ts));
        for o in &occurrences {
            let source = events.iter().find(|e| e.id == o.event_id).unwrap();
            assert_eq!(o.end_ts - o.start_ts, source.duration());
        }
    }

    #[test]
    fn expansion_is_idempotent() {
        let events = vec![
            event(ts(2025, 1, 5, 10), ts(2025, 1, 5, 11), Some("30 10 * * *")),
            event(ts(2025, 1, 7, 10), ts(2025, 1, 7, 12), None),
        ];
        let expander = EventSetExpander::default();
        assert_eq!(
            expander.expand(&events, &january()).unwrap(),
            expander.expand(&events, &january()).unwrap()
        );
    }

    #[test]
    fn zero_length_window_is_empty() {
        let at = ts(2025, 1, 10, 8);
        let events = vec![
            event(at, at + HOUR, None),
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 1), Some("* * * * *")),
        ];
        let window = TimeWindow::new(at, at).unwrap();
        assert!(EventSetExpander::default()
            .expand(&events, &window)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn invalid_rule_fails_the_whole_expansion() {
        let bad = event(ts(2025, 1, 2, 0), ts(2025, 1, 2, 1), Some("not a rule"));
        let events = vec![
            event(ts(2025, 1, 3, 0), ts(2025, 1, 3, 1), None),
            bad.clone(),
        ];
        match EventSetExpander::default().expand(&events, &january()) {
            Err(ExpansionError::InvalidRecurrenceRule { event_id, .. }) => {
                assert_eq!(event_id, bad.id)
            }
            other => panic!("Expected invalid recurrence rule, got: {:?}", other),
        }
    }

    #[test]
    fn per_event_cap_applies_to_each_event() {
        let events = vec![
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 0), Some("* * * * *")),
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 0), Some("*/2 * * * *")),
        ];
        let expander = EventSetExpander::new(OccurrenceCap {
            limit: 10,
            scope: CapScope::PerEvent,
        });
        assert_eq!(expander.expand(&events, &january()).unwrap().len(), 20);
    }

    #[test]
    fn result_set_cap_is_shared_between_events() {
        let events = vec![
            event(ts(2025, 1, 15, 0), ts(2025, 1, 15, 1), None),
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 0), Some("* * * * *")),
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 0), Some("*/2 * * * *")),
        ];
        let expander = EventSetExpander::new(OccurrenceCap {
            limit: 10,
            scope: CapScope::PerResultSet,
        });
        let occurrences = expander.expand(&events, &january()).unwrap();
        // One stored instance plus ten generated ones
        assert_eq!(occurrences.len(), 11);
        assert!(occurrences.iter().all(|o| o.event_id != events[2].id));
    }

    #[test]
    fn stops_when_cancelled() {
        let events = vec![
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 1), Some("0 0 * * *")),
            event(ts(2025, 1, 1, 0), ts(2025, 1, 1, 1), Some("0 12 * * *")),
        ];
        let polls = Cell::new(0);
        let result = EventSetExpander::default().expand_until_cancelled(&events, &january(), || {
            polls.set(polls.get() + 1);
            polls.get() > 1
        });
        assert_eq!(result, Err(ExpansionError::Cancelled));
        assert_eq!(polls.get(), 2);
    }
}
