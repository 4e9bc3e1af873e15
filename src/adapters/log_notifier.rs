use crate::domain::ports::Notifier;
use async_trait::async_trait;

/// Writes each notification to the operational log instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Log line for one notification.
pub fn render(recipient: &str, subject: &str, body: &str) -> String {
    format!("Send email to: {recipient}\nSubject: {subject}\nBody: {body}")
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) {
        tracing::info!(recipient, "{}", render(recipient, subject, body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handler::VerificationNotifier;
    use crate::core::http::HttpRequest;
    use crate::utils::logger::DEFAULT_DIRECTIVES;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_render() {
        assert_eq!(
            render(
                "a@b.com",
                "Your Tobler CRM Verification Code",
                "Your verification code is: 123456"
            ),
            "Send email to: a@b.com\nSubject: Your Tobler CRM Verification Code\nBody: Your verification code is: 123456"
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a subscriber using the default production filter.
    fn with_default_filter<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_DIRECTIVES))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.text()
    }

    #[test]
    fn test_notify_passes_default_filter() {
        let output = with_default_filter(|| {
            tokio_test::block_on(LogNotifier::new().notify(
                "a@b.com",
                "Your Tobler CRM Verification Code",
                "Your verification code is: 123456",
            ))
        });

        assert!(output.contains("INFO"));
        assert!(output.contains(
            "Send email to: a@b.com\nSubject: Your Tobler CRM Verification Code\nBody: Your verification code is: 123456"
        ));
    }

    #[test]
    fn test_handler_emits_one_record_per_success() {
        let handler = VerificationNotifier::new(LogNotifier::new());

        let output = with_default_filter(|| {
            tokio_test::block_on(async {
                let body = r#"{"email":"a@b.com","code":"123456"}"#;
                let ok = handler.handle(HttpRequest::new("POST", body)).await;
                assert_eq!(ok.status, 200);

                let rejected = handler
                    .handle(HttpRequest::new("POST", r#"{"email":"a@b.com"}"#))
                    .await;
                assert_eq!(rejected.status, 400);
            })
        });

        assert_eq!(output.matches("Send email to: ").count(), 1);
        assert!(output.contains("Body: Your verification code is: 123456"));
    }
}
