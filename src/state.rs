// src/state.rs

use crate::config::Config;
use crate::registry::{DistributionRegistry, RestrictionRegistry};
use axum::extract::FromRef;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub distributions: DistributionRegistry,
    pub restrictions: RestrictionRegistry,
}

impl AppState {
    /// State with empty registries, as at process start.
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config,
            distributions: DistributionRegistry::new(),
            restrictions: RestrictionRegistry::new(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for DistributionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.distributions.clone()
    }
}

impl FromRef<AppState> for RestrictionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.restrictions.clone()
    }
}
