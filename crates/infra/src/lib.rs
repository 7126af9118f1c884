mod cache;
mod config;
mod repos;
mod system;

pub use cache::{TtlCache, UserActivity};
pub use config::Config;
pub use repos::Repos;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::warn;

#[derive(Clone)]
pub struct CalenduhContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub activity: Arc<UserActivity>,
    /// Process start, in millis
    pub started_at: i64,
}

impl CalenduhContext {
    fn create(repos: Repos, config: Config) -> Self {
        let sys: Arc<dyn ISys> = Arc::new(RealSys {});
        Self {
            activity: Arc::new(UserActivity::new(config.active_user_ttl, sys.clone())),
            started_at: sys.get_timestamp_millis(),
            repos,
            config,
            sys,
        }
    }

    pub fn create_inmemory() -> Self {
        Self::create(Repos::create_inmemory(), Config::new())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<CalenduhContext> {
    let config = Config::new();
    let repos = match &config.database_url {
        Some(url) => Repos::create_postgres(url).await?,
        None => {
            warn!("Running with in memory repositories");
            Repos::create_inmemory()
        }
    };
    Ok(CalenduhContext::create(repos, config))
}
