//! Gym Server - membership roster and subscription tracking for a single gym
//!
//! # Modules
//!
//! ```text
//! gym-server/src/
//! ├── core/          # config, state, start-up errors, HTTP server
//! ├── membership/    # subscription rules: expiry, status, renewal, search
//! ├── db/            # SQLite pool, migrations, member repository
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging and input validation
//! ```
//!
//! Handlers load rows through [`db::repository`], apply the pure rules in
//! [`membership`] with the current time, and write the result back.

pub mod api;
pub mod core;
pub mod db;
pub mod membership;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, then initialize logging from the environment.
pub fn setup_environment() -> Config {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());
    config
}
