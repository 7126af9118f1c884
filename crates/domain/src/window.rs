use thiserror::Error;

/// Upper bound used when the caller does not supply an `end`, in millis
pub const DEFAULT_WINDOW_END: i64 = 1 << 48;

/// A closed query range `[start, end]` in millis since epoch with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidWindowError {
    #[error("Window bound `{0}` is not a valid timestamp")]
    MalformedInput(String),
    #[error("Window start: {start} is after window end: {end}")]
    InvalidRange { start: i64, end: i64 },
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Result<Self, InvalidWindowError> {
        if start > end {
            return Err(InvalidWindowError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `ts` lies strictly inside the window
    pub fn contains_strictly(&self, ts: i64) -> bool {
        self.start < ts && ts < self.end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: 0,
            end: DEFAULT_WINDOW_END,
        }
    }
}

/// Turns the textual `start` and `end` query parameters into a `TimeWindow`
pub struct WindowResolver;

impl WindowResolver {
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<TimeWindow, InvalidWindowError> {
        let start = parse_bound(start)?.unwrap_or(0);
        let end = parse_bound(end)?.unwrap_or(DEFAULT_WINDOW_END);
        TimeWindow::new(start, end)
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<i64>, InvalidWindowError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| InvalidWindowError::MalformedInput(raw.to_string())),
    }
}
