use crate::core::http::{HttpRequest, HttpResponse};
use crate::domain::model::{NotificationResult, VerificationEmail, VerificationRequest};
use crate::domain::ports::Notifier;
use crate::utils::error::{NotifierError, Result};

/// Validates verification-code requests and hands each accepted one to a
/// [`Notifier`]. Holds no per-request state, so one instance serves every
/// invocation.
pub struct VerificationNotifier<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> VerificationNotifier<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handles one request. Every failure becomes an error response.
    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.process(&request).await {
            Ok(result) => match serde_json::to_string(&result) {
                Ok(body) => HttpResponse::json(200, body),
                Err(e) => {
                    tracing::error!("Failed to serialize response: {}", e);
                    error_response(&NotifierError::from(e))
                }
            },
            Err(e) => {
                tracing::debug!("Rejected {} request: {}", request.method, e);
                error_response(&e)
            }
        }
    }

    /// Method check, body parse, field check, then one notification.
    pub async fn process(&self, request: &HttpRequest) -> Result<NotificationResult> {
        if !request.is_post() {
            return Err(NotifierError::MethodNotAllowed {
                method: request.method.clone(),
            });
        }

        let verification = VerificationRequest::from_body(&request.body)?;
        let email = VerificationEmail::for_request(&verification);

        self.notifier
            .notify(&email.recipient, &email.subject, &email.body)
            .await;

        Ok(NotificationResult { success: true })
    }
}

fn error_response(error: &NotifierError) -> HttpResponse {
    HttpResponse::text(error.status(), error.client_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingNotifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn notify(&self, _recipient: &str, _subject: &str, _body: &str) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn calls(handler: &VerificationNotifier<CountingNotifier>) -> usize {
        handler.notifier().calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn test_non_post_is_rejected_before_parsing() {
        let handler = VerificationNotifier::new(CountingNotifier::default());
        let body = r#"{"email":"a@b.com","code":"123456"}"#;

        for method in ["GET", "PUT", "DELETE", "OPTIONS", ""] {
            let err = handler
                .process(&HttpRequest::new(method, body))
                .await
                .unwrap_err();
            assert!(matches!(err, NotifierError::MethodNotAllowed { .. }));
        }
        assert_eq!(calls(&handler), 0);
    }

    #[tokio::test]
    async fn test_failed_validation_sends_nothing() {
        let handler = VerificationNotifier::new(CountingNotifier::default());

        let response = handler
            .handle(HttpRequest::new("POST", r#"{"code":"1"}"#))
            .await;
        assert_eq!(response.status, 400);
        assert_eq!(response.body, "Missing email or code");
        assert_eq!(calls(&handler), 0);
    }

    #[test]
    fn test_handle_success_blocking() {
        let handler = VerificationNotifier::new(CountingNotifier::default());
        let response = tokio_test::block_on(
            handler.handle(HttpRequest::new("POST", r#"{"email":"a@b.com","code":"9"}"#)),
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"success":true}"#);
        assert_eq!(calls(&handler), 1);
    }
}
