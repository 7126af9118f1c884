use crate::shared::{
    entity::{Entity, ID},
    recurrence::{InvalidRecurrenceRuleError, RecurrenceRule},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: ID,
    pub calendar_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notification: Option<String>,
    /// Cron-style recurrence expression, `None` (or empty) when the event
    /// does not recur
    pub frequency: Option<String>,
    pub priority: i32,
    /// Only affects how clients render `start_ts` and `end_ts`
    pub all_day: bool,
    pub start_ts: i64,
    pub end_ts: i64,
    pub created: i64,
    pub updated: i64,
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl CalendarEvent {
    pub fn duration(&self) -> i64 {
        self.end_ts - self.start_ts
    }

    /// The recurrence expression if the event recurs
    pub fn recurrence_expression(&self) -> Option<&str> {
        self.frequency
            .as_deref()
            .map(str::trim)
            .filter(|expr| !expr.is_empty())
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence_expression().is_some()
    }

    /// Parses the stored recurrence expression, `Ok(None)` for events
    /// that do not recur
    pub fn recurrence_rule(&self) -> Result<Option<RecurrenceRule>, InvalidRecurrenceRuleError> {
        self.recurrence_expression()
            .map(RecurrenceRule::parse)
            .transpose()
    }

    /// Sets the recurrence expression after validating it. An empty
    /// expression clears the recurrence.
    pub fn set_frequency(
        &mut self,
        frequency: Option<String>,
    ) -> Result<(), InvalidRecurrenceRuleError> {
        let frequency = frequency
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        if let Some(expr) = &frequency {
            RecurrenceRule::parse(expr)?;
        }
        self.frequency = frequency;
        Ok(())
    }

    pub fn is_valid_timespan(start_ts: i64, end_ts: i64) -> bool {
        start_ts >= 0 && end_ts >= start_ts
    }
}


#[cfg(test)]
mod test {
    use super::test_helpers::event;

    #[test]
    fn empty_frequency_does_not_recur() {
        assert!(!event(0, 10, None).is_recurring());
        assert!(!event(0, 10, Some("")).is_recurring());
        assert!(!event(0, 10, Some("   ")).is_recurring());
        assert!(event(0, 10, Some("0 0 * * *")).is_recurring());
    }

    #[test]
    fn recurrence_rule_is_parsed_from_frequency() {
        assert!(event(0, 10, None).recurrence_rule().unwrap().is_none());
        assert!(event(0, 10, Some("0 0 * * *"))
            .recurrence_rule()
            .unwrap()
            .is_some());
        assert!(event(0, 10, Some("every day")).recurrence_rule().is_err());
    }

    #[test]
    fn set_frequency_validates_expression() {
        let mut e = event(0, 10, None);
        assert!(e.set_frequency(Some("every tuesday".into())).is_err());
        assert_eq!(e.frequency, None);

        assert!(e.set_frequency(Some(" 0 9 * * * ".into())).is_ok());
        assert_eq!(e.frequency.as_deref(), Some("0 9 * * *"));

        assert!(e.set_frequency(Some("".into())).is_ok());
        assert_eq!(e.frequency, None);
    }

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(event(1000, 4600, None).duration(), 3600);
    }
}
