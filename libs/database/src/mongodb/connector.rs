use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Errors raised while establishing a MongoDB connection
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB by connection string, with driver-default pool limits.
///
/// The connection is verified with a `ping` before the client is returned,
/// so a returned `Ok` means the server is actually reachable.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    info!("Connecting to MongoDB at {}", url);

    let mut options = ClientOptions::parse(url).await?;
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(30));

    let client = Client::with_options(options)?;
    ping(&client).await?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// Connect using a [`MongoConfig`], applying its pool and timeout settings.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let url = config.url();
    info!("Connecting to MongoDB at {}", url);

    let mut options = ClientOptions::parse(&url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    ping(&client).await?;

    info!("Connected to MongoDB database '{}'", config.database());
    Ok(client)
}

/// Connect by connection string with retry on transient startup failures.
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let url_owned = url.to_string();

    match retry_config {
        Some(config) => retry_with_backoff(|| connect(&url_owned), config).await,
        None => retry(|| connect(&url_owned)).await,
    }
}

/// Connect from config with retry on transient startup failures.
///
/// This is what binaries call at startup: MongoDB may still be coming up
/// when the service starts, so the first attempts are allowed to fail.
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    let config_clone = config.clone();

    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(&config_clone), policy).await,
        None => retry(|| connect_from_config(&config_clone)).await,
    }
}

async fn ping(client: &Client) -> Result<(), MongoError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn connect_reaches_local_server() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        assert!(connect(&url).await.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn connect_from_config_reaches_local_server() {
        let config = MongoConfig::with_database("localhost", 27017, "catalog-test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
