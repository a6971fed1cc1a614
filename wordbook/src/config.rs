use crate::utils::cli::{Args, StoreArgs};
use thiserror::Error;

/// Every problem found while validating the startup configuration.
#[derive(Debug, Error)]
#[error("{}", .0.join("\n"))]
pub struct ConfigError(pub Vec<String>);

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub db_url: String,
    pub max_connections: u32,
    pub aws_region: Option<String>,
    pub bucket: Option<String>,
}

/// Where word images live. Only the setup tooling needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectStoreConfig {
    pub region: String,
    pub bucket: String,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Config, ConfigError> {
        let mut errors = Vec::new();
        if args.host.trim().is_empty() {
            errors.push("WORDBOOK_HOST must not be empty".to_string());
        }
        if args.port == 0 {
            errors.push("WORDBOOK_PORT must not be 0".to_string());
        }

        let store = match StoreConfig::from_args(&args.store) {
            Ok(store) => Some(store),
            Err(ConfigError(store_errors)) => {
                errors.extend(store_errors);
                None
            }
        };

        match store {
            Some(store) if errors.is_empty() => Ok(Config {
                host: args.host.trim().to_string(),
                port: args.port,
                store,
            }),
            _ => Err(ConfigError(errors)),
        }
    }
}

impl StoreConfig {
    pub fn from_args(args: &StoreArgs) -> Result<StoreConfig, ConfigError> {
        let mut errors = Vec::new();
        if args.database_url.trim().is_empty() {
            errors.push("DATABASE_URL must not be empty".to_string());
        }
        if args.max_connections == 0 {
            errors.push("WORDBOOK_DB_MAX_CONNECTIONS must be at least 1".to_string());
        }
        let aws_region = optional_setting("AWS_REGION", args.aws_region.as_deref(), &mut errors);
        let bucket = optional_setting("AWS_S3_BUCKET", args.bucket.as_deref(), &mut errors);

        if !errors.is_empty() {
            return Err(ConfigError(errors));
        }
        Ok(StoreConfig {
            db_url: args.database_url.trim().to_string(),
            max_connections: args.max_connections,
            aws_region,
            bucket,
        })
    }

    pub fn object_store(&self) -> Result<ObjectStoreConfig, ConfigError> {
        match (&self.aws_region, &self.bucket) {
            (Some(region), Some(bucket)) => Ok(ObjectStoreConfig {
                region: region.clone(),
                bucket: bucket.clone(),
            }),
            (region, bucket) => {
                let mut errors = Vec::new();
                if region.is_none() {
                    errors.push("AWS_REGION is required for object store commands".to_string());
                }
                if bucket.is_none() {
                    errors.push("AWS_S3_BUCKET is required for object store commands".to_string());
                }
                Err(ConfigError(errors))
            }
        }
    }
}

fn optional_setting(name: &str, value: Option<&str>, errors: &mut Vec<String>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        errors.push(format!("{name} is set but empty"));
        return None;
    }
    Some(value.to_string())
}
