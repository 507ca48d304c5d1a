// Runtime configuration, read from the environment.
//
// Variables
// - STUDENTS_BIND_ADDR: socket address to listen on, default 0.0.0.0:8080.
// - STUDENTS_BASE_PATH: path the resource is mounted at, default /students.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STUDENTS_BIND_ADDR";
pub const BASE_PATH_VAR: &str = "STUDENTS_BASE_PATH";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);
const DEFAULT_BASE_PATH: &str = "/students";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {value:?} is not a socket address")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: {value:?} must start with '/', must not end with '/' and must not be '/'")]
    InvalidBasePath { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(BASE_PATH_VAR) {
            if !value.starts_with('/') || value.ends_with('/') {
                return Err(ConfigError::InvalidBasePath {
                    var: BASE_PATH_VAR,
                    value,
                });
            }
            config.base_path = value;
        }

        Ok(config)
    }
}

/// Loads a `.env` file into the process environment, if there is one.
///
/// Returns the error worth reporting. A missing file is not one.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    unreadable_dotenv(dotenvy::dotenv())
}

fn unreadable_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(error) if error.not_found() => None,
        Err(error) => Some(error),
    }
}
