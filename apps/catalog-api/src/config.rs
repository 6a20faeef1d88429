use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

// MongoDB settings come from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
/// Loaded once at startup; there is no runtime reconfiguration.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_succeeds_with_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_HOST", None::<&str>),
                ("MONGODB_PORT", None),
                ("MONGODB_DATABASE", None),
                ("SERVICE_NAME", None),
                ("HOST", None),
                ("PORT", None),
                ("APP_ENV", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "catalog_api");
                assert_eq!(config.mongodb.url(), "mongodb://localhost:27017");
                assert_eq!(config.mongodb.database(), "catalog");
                assert_eq!(config.server.port, 8080);
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn from_env_composes_overrides() {
        temp_env::with_vars(
            [
                ("MONGODB_HOST", Some("mongo")),
                ("MONGODB_PORT", Some("27018")),
                ("SERVICE_NAME", Some("Catalog")),
                ("PORT", Some("9000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.url(), "mongodb://mongo:27018");
                assert_eq!(config.mongodb.database(), "Catalog");
                assert_eq!(config.server.port, 9000);
            },
        );
    }
}
