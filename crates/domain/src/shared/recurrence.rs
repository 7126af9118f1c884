use chrono::{TimeZone, Utc};
use cron::Schedule;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Number of fields in a classic crontab line: `min hour dom month dow`
const CLASSIC_CRON_FIELDS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidRecurrenceRuleError {
    #[error("Recurrence rule `{expression}` could not be parsed: {reason}")]
    Malformed { expression: String, reason: String },
    #[error("Recurrence rule `{expression}` did not advance past timestamp {after_ts}")]
    NonAdvancing { expression: String, after_ts: i64 },
}

/// A cron-style recurrence expression that can compute its next trigger time.
///
/// Classic five field expressions are accepted and treated as firing on
/// second zero. Six and seven field expressions (with seconds and years) and
/// shorthands like `@daily` are handed to the evaluator unchanged.
#[derive(Debug, Clone)]
pub struct RecurrenceRule {
    expression: String,
    schedule: Schedule,
}

impl RecurrenceRule {
    pub fn parse(expression: &str) -> Result<Self, InvalidRecurrenceRuleError> {
        let expression = expression.trim();
        let malformed = |reason: String| InvalidRecurrenceRuleError::Malformed {
            expression: expression.to_string(),
            reason,
        };
        if expression.is_empty() {
            return Err(malformed("expression is empty".into()));
        }

        let normalized = normalize_expression(expression);
        let schedule = Schedule::from_str(&normalized).map_err(|e| malformed(e.to_string()))?;

        Ok(Self {
            expression: expression.to_string(),
            schedule,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The first trigger time strictly after `after_ts`, in millis.
    ///
    /// `Ok(None)` means the rule has no triggers left. A trigger that is not
    /// strictly later than `after_ts` is reported as an error so that callers
    /// looping on this method always terminate.
    pub fn next_after(&self, after_ts: i64) -> Result<Option<i64>, InvalidRecurrenceRuleError> {
        let after = match Utc.timestamp_millis_opt(after_ts).single() {
            Some(after) => after,
            None => return Ok(None),
        };

        let candidate = self
            .schedule
            .after(&after)
            .next()
            .map(|next| next.timestamp_millis());
        self.ensure_advances(after_ts, candidate)
    }

    fn ensure_advances(
        &self,
        after_ts: i64,
        candidate: Option<i64>,
    ) -> Result<Option<i64>, InvalidRecurrenceRuleError> {
        match candidate {
            Some(next_ts) if next_ts <= after_ts => Err(InvalidRecurrenceRuleError::NonAdvancing {
                expression: self.expression.clone(),
                after_ts,
            }),
            candidate => Ok(candidate),
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = InvalidRecurrenceRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

fn normalize_expression(expression: &str) -> String {
    if expression.starts_with('@') {
        return expression.to_string();
    }
    let fields = expression.split_whitespace().collect::<Vec<_>>();
    if fields.len() == CLASSIC_CRON_FIELDS {
        format!("0 {}", fields.join(" "))
    } else {
        fields.join(" ")
    }
}
