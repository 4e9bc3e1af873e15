use async_trait::async_trait;

/// Outbound notification capability.
///
/// Fire-and-forget: the handler never inspects an outcome, so implementations
/// deal with their own failures.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient: &str, subject: &str, body: &str);
}

#[async_trait]
impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) {
        (**self).notify(recipient, subject, body).await
    }
}
