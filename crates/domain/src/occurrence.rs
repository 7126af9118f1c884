use crate::{
    event::CalendarEvent,
    shared::{entity::ID, recurrence::InvalidRecurrenceRuleError},
    window::TimeWindow,
};
use std::str::FromStr;

pub const DEFAULT_OCCURRENCE_CAP: usize = 200;

/// One concrete instance of a `CalendarEvent`, either its stored instance
/// or one generated from its recurrence rule
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub event_id: ID,
    pub calendar_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notification: Option<String>,
    pub frequency: Option<String>,
    pub priority: i32,
    pub all_day: bool,
    pub start_ts: i64,
    pub end_ts: i64,
}

impl Occurrence {
    /// The event's own stored instance
    pub fn base(event: &CalendarEvent) -> Self {
        Self::at(event, event.start_ts, event.end_ts)
    }

    fn at(event: &CalendarEvent, start_ts: i64, end_ts: i64) -> Self {
        Self {
            event_id: event.id,
            calendar_id: event.calendar_id,
            name: event.name.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            notification: event.notification.clone(),
            frequency: event.frequency.clone(),
            priority: event.priority,
            all_day: event.all_day,
            start_ts,
            end_ts,
        }
    }
}

/// What the occurrence cap is counted against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapScope {
    /// Every recurring event may generate up to `limit` occurrences
    PerEvent,
    /// All recurring events in one expansion share a budget of `limit`
    /// generated occurrences. Stored instances never count against it.
    PerResultSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccurrenceCap {
    pub limit: usize,
    pub scope: CapScope,
}

impl Default for OccurrenceCap {
    fn default() -> Self {
        Self {
            limit: DEFAULT_OCCURRENCE_CAP,
            scope: CapScope::PerEvent,
        }
    }
}

impl FromStr for CapScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "event" | "per_event" => Ok(Self::PerEvent),
            "result_set" | "per_result_set" => Ok(Self::PerResultSet),
            other => Err(format!("Unknown occurrence cap scope: {}", other)),
        }
    }
}

/// Expands a single event template into the occurrences its recurrence
/// rule produces inside a window.
///
/// Expansion starts from the template's end, so the template's own
/// instance is never generated again. Occurrences keep the template's
/// duration and are returned in generation order.
pub struct OccurrenceGenerator;

impl OccurrenceGenerator {
    pub fn generate(
        event: &CalendarEvent,
        window: &TimeWindow,
        limit: usize,
    ) -> Result<Vec<Occurrence>, InvalidRecurrenceRuleError> {
        let rule = match event.recurrence_rule()? {
            Some(rule) => rule,
            None => return Ok(Vec::new()),
        };
        let duration = event.duration();

        // Triggers at or before window start are never included and the rule
        // is deterministic, so skipping ahead yields the same occurrences
        let mut cursor = std::cmp::max(event.end_ts, window.start());
        let mut occurrences = Vec::new();

        while occurrences.len() < limit {
            let next = match rule.next_after(cursor)? {
                Some(next) => next,
                None => break,
            };
            if next >= window.end() {
                break;
            }
            if window.contains_strictly(next) {
                occurrences.push(Occurrence::at(event, next, next + duration));
            }
            cursor = next;
        }

        Ok(occurrences)
    }
}
