// Adapters layer: concrete notifiers and hosting-runtime event formats.

pub mod log_notifier;
pub mod proxy;

pub use log_notifier::LogNotifier;
pub use proxy::{ProxyEvent, ProxyResponse};
