use calenduh_domain::{CapScope, OccurrenceCap, DEFAULT_OCCURRENCE_CAP};
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;
const DEFAULT_SESSION_DURATION_MINUTES: i64 = 60 * 24 * 7;
const DEFAULT_ACTIVE_USER_TTL_MINUTES: i64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. In memory repositories are used when absent.
    pub database_url: Option<String>,
    /// Hard limit on the number of occurrences a recurrence rule may generate
    /// for a single query
    pub occurrence_cap: OccurrenceCap,
    /// How long a newly created session is valid, in millis
    pub session_duration: i64,
    /// How long a user counts as active after the last request, in millis
    pub active_user_ttl: i64,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if database_url.is_none() {
            warn!("Did not find DATABASE_URL environment variable. Going to use in memory repositories, nothing will be persisted.");
        }

        let limit = parse_or_default(&lookup, "OCCURRENCE_CAP", DEFAULT_OCCURRENCE_CAP);
        let scope = parse_or_default(&lookup, "OCCURRENCE_CAP_SCOPE", CapScope::PerEvent);
        info!("Occurrence cap is {} with scope {:?}", limit, scope);

        let session_duration_minutes = parse_or_default(
            &lookup,
            "SESSION_DURATION_MINUTES",
            DEFAULT_SESSION_DURATION_MINUTES,
        );
        let active_user_ttl_minutes = parse_or_default(
            &lookup,
            "ACTIVE_USER_TTL_MINUTES",
            DEFAULT_ACTIVE_USER_TTL_MINUTES,
        );

        Self {
            port,
            database_url,
            occurrence_cap: OccurrenceCap { limit, scope },
            session_duration: 1000 * 60 * session_duration_minutes,
            active_user_ttl: 1000 * 60 * active_user_ttl_minutes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {:?}.",
                    key, raw, default
                );
                default
            }
        },
        None => default,
    }
}
