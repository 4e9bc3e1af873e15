pub mod lambda;

use crate::utils::error::{NotifierError, Result};
use crate::utils::validation::validate_one_of;
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl FromStr for LogFormat {
    type Err = NotifierError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        validate_one_of("log_format", &normalized, &["json", "compact"])?;
        Ok(match normalized.as_str() {
            "compact" => LogFormat::Compact,
            _ => LogFormat::Json,
        })
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "verification-notifier")]
#[command(about = "Invoke the verification-code notifier locally")]
pub struct CliConfig {
    #[arg(long, default_value = "POST")]
    pub method: String,

    #[arg(long, help = "Request body; read from stdin when omitted")]
    pub body: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("method", &self.method)
    }
}
