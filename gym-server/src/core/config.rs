use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | directory holding the database |
/// | DATABASE_PATH | <WORK_DIR>/gym.db | SQLite file |
/// | HTTP_PORT | 3000 | listen port |
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | default filter level |
/// | LOG_DIR | unset | enables rolling file logs |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
/// | TRAINERS | Deepu,Owais,Nandan,Vaishak | allowed trainer labels, empty = any |
/// | WHATSAPP_COUNTRY_CODE | 91 | prefix for phones without `+` |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown budget |
/// | GYM_NAME | Dfitness Planet | name printed on receipts |
///
/// ```ignore
/// WORK_DIR=/srv/gym HTTP_PORT=8080 cargo run -p gym-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    /// Explicit database file; falls back to `<work_dir>/gym.db`
    pub database_path: Option<String>,
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub db_max_connections: u32,
    /// Trainer labels accepted on signup and profile edits. Empty accepts any.
    pub trainers: Vec<String>,
    pub whatsapp_country_code: String,
    pub shutdown_timeout_ms: u64,
    pub gym_name: String,
}

impl Config {
    /// Load configuration from the environment, using defaults for unset variables
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            database_path: std::env::var("DATABASE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            trainers: std::env::var("TRAINERS")
                .map(|list| parse_trainers(&list))
                .unwrap_or_else(|_| default_trainers()),
            whatsapp_country_code: std::env::var("WHATSAPP_COUNTRY_CODE")
                .unwrap_or_else(|_| "91".into()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            gym_name: std::env::var("GYM_NAME").unwrap_or_else(|_| "Dfitness Planet".into()),
        }
    }

    /// Defaults with an explicit work directory, ignoring the environment.
    ///
    /// Used by tests.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            database_path: None,
            http_port: 0,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            db_max_connections: 5,
            trainers: default_trainers(),
            whatsapp_country_code: "91".into(),
            shutdown_timeout_ms: 10000,
            gym_name: "Dfitness Planet".into(),
        }
    }

    /// Resolved SQLite file path
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.work_dir).join("gym.db"),
        }
    }

    /// Whether `trainer` may be assigned. `None` (no trainer) is always allowed.
    pub fn trainer_allowed(&self, trainer: Option<&str>) -> bool {
        match trainer {
            None => true,
            Some(_) if self.trainers.is_empty() => true,
            Some(name) => self.trainers.iter().any(|t| t.eq_ignore_ascii_case(name)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_trainers() -> Vec<String> {
    ["Deepu", "Owais", "Nandan", "Vaishak"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn parse_trainers(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_defaults_under_work_dir() {
        let config = Config::with_work_dir("/srv/gym");
        assert_eq!(config.database_path(), PathBuf::from("/srv/gym/gym.db"));

        let explicit = Config {
            database_path: Some("/tmp/other.db".into()),
            ..Config::with_work_dir("/srv/gym")
        };
        assert_eq!(explicit.database_path(), PathBuf::from("/tmp/other.db"));
    }

    #[test]
    fn trainer_list_parsing() {
        assert_eq!(parse_trainers(" Deepu, ,Owais ,"), vec!["Deepu", "Owais"]);
        assert!(parse_trainers("").is_empty());
    }

    #[test]
    fn trainer_allowed_checks_roster() {
        let config = Config::with_work_dir(".");
        assert!(config.trainer_allowed(None));
        assert!(config.trainer_allowed(Some("Deepu")));
        assert!(config.trainer_allowed(Some("owais")));
        assert!(!config.trainer_allowed(Some("Arnold")));

        let open = Config {
            trainers: Vec::new(),
            ..Config::with_work_dir(".")
        };
        assert!(open.trainer_allowed(Some("Arnold")));
    }
}
