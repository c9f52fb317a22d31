use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// Shared handler state
///
/// Cheap to clone; the pool is reference-counted and the config sits behind an `Arc`.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            pool: db.pool,
        }
    }

    /// Open the configured database file (creating its directory) and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = DbService::new(&db_path.to_string_lossy(), config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }
}
