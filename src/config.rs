use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDataPath,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyDataPath => {
                write!(f, "STORAGE_PATH must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_data_path(env::var("STORAGE_PATH").ok())
    }

    pub fn from_data_path(data_path: Option<String>) -> Result<Self, ConfigError> {
        let data_path = data_path.unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        if data_path.trim().is_empty() {
            return Err(ConfigError::EmptyDataPath);
        }

        Ok(Config { data_path })
    }
}
