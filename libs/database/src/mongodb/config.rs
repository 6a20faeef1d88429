use core_config::{env_or_default, env_parse_or_default, ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// The connection string is assembled from `host` and `port`; the database
/// name doubles as the service's logical name. Loaded once at startup, never
/// reloaded.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Hostname of the MongoDB server
    pub host: String,

    /// Port of the MongoDB server
    pub port: u16,

    /// Database name to use
    pub database: String,

    /// Optional application name reported to the server
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config pointing at `host:port` with the default database.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Create a config with an explicit database name.
    pub fn with_database(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the application name reported in server logs.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// The assembled connection string, `mongodb://host:port`.
    pub fn url(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }

    /// The configured database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "catalog".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Environment variables:
/// - `MONGODB_HOST` (default: localhost)
/// - `MONGODB_PORT` (default: 27017)
/// - `MONGODB_DATABASE`, falling back to `SERVICE_NAME` (default: catalog)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("MONGODB_HOST", "localhost");
        let port = env_parse_or_default("MONGODB_PORT", 27017)?;

        // The service name doubles as the database name when no explicit
        // database override is present.
        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("SERVICE_NAME"))
            .unwrap_or_else(|_| "catalog".to_string());

        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        Ok(Self {
            host,
            port,
            database,
            app_name,
            max_pool_size: env_parse_or_default("MONGODB_MAX_POOL_SIZE", 100)?,
            min_pool_size: env_parse_or_default("MONGODB_MIN_POOL_SIZE", 5)?,
            connect_timeout_secs: env_parse_or_default("MONGODB_CONNECT_TIMEOUT_SECS", 10)?,
            server_selection_timeout_secs: env_parse_or_default(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                30,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_assembles_host_and_port() {
        let config = MongoConfig::new("mongo.internal", 27018);
        assert_eq!(config.url(), "mongodb://mongo.internal:27018");
        assert_eq!(config.database(), "catalog");
    }

    #[test]
    fn with_database_overrides_name() {
        let config = MongoConfig::with_database("localhost", 27017, "inventory");
        assert_eq!(config.database(), "inventory");
    }

    #[test]
    fn with_app_name_sets_name() {
        let config = MongoConfig::new("localhost", 27017).with_app_name("catalog-api");
        assert_eq!(config.app_name.as_deref(), Some("catalog-api"));
    }

    #[test]
    fn from_env_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_HOST", None::<&str>),
                ("MONGODB_PORT", None),
                ("MONGODB_DATABASE", None),
                ("SERVICE_NAME", None),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url(), "mongodb://localhost:27017");
                assert_eq!(config.database(), "catalog");
                assert_eq!(config.max_pool_size, 100);
            },
        );
    }

    #[test]
    fn from_env_reads_overrides() {
        temp_env::with_vars(
            [
                ("MONGODB_HOST", Some("db.example.com")),
                ("MONGODB_PORT", Some("27018")),
                ("MONGODB_DATABASE", Some("catalogdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url(), "mongodb://db.example.com:27018");
                assert_eq!(config.database(), "catalogdb");
            },
        );
    }

    #[test]
    fn from_env_falls_back_to_service_name() {
        temp_env::with_vars(
            [
                ("MONGODB_DATABASE", None::<&str>),
                ("SERVICE_NAME", Some("Catalog")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.database(), "Catalog");
            },
        );
    }

    #[test]
    fn from_env_rejects_bad_port() {
        temp_env::with_var("MONGODB_PORT", Some("not-a-port"), || {
            assert!(MongoConfig::from_env().is_err());
        });
    }
}
