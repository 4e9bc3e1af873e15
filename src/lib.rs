pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LogNotifier, ProxyEvent, ProxyResponse};
pub use config::{lambda::LambdaConfig, LogFormat};
pub use core::{
    handler::VerificationNotifier,
    http::{HttpRequest, HttpResponse},
};
pub use domain::ports::Notifier;
pub use utils::error::{NotifierError, Result};
