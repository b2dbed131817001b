use std::net::IpAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let host = optional_var("HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value: host.clone(),
                reason: e.to_string(),
            }
        })?;

        let port: u16 = match optional_var("PORT")? {
            Some(port) => port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host,
            port,
        })
    }
}

/// Reads an optional variable; a value that is not valid unicode is an error.
fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: String::new(),
            reason: e.to_string(),
        }),
    }
}
