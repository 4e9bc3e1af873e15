use crate::config::LogFormat;
use crate::utils::error::Result;
use std::env;

pub const LOG_FORMAT_VAR: &str = "NOTIFIER_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaConfig {
    pub log_format: LogFormat,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { log_format })
    }
}
