//! Email channel provider implementation.
//!
//! Forwards the title as the mail subject and delegates delivery to the
//! injected transport collaborator (an SMTP client in a real deployment).

use super::provider::NotificationProvider;
use crate::error::AppResult;
use crate::external::DeliveryTransport;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// Email channel provider
///
/// Stateless beyond the transport handle. The subject line is always
/// forwarded; the recipient is treated as an opaque email address.
#[derive(Clone)]
pub struct EmailProvider {
    transport: Arc<dyn DeliveryTransport>,
}

impl EmailProvider {
    pub fn new(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl NotificationProvider for EmailProvider {
    async fn send(&self, recipient: &str, title: &str, body: &str) -> AppResult<DeliveryReceipt> {
        let message = OutboundMessage::new(recipient, Some(title.to_string()), body);
        tracing::debug!(provider = self.name(), recipient, "sending email notification");
        self.transport.deliver(self.channel(), &message).await
    }

    fn channel(&self) -> ChannelType {
        ChannelType::Email
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryTransport;

    #[tokio::test]
    async fn test_email_forwards_title_and_body_verbatim() {
        let transport = Arc::new(MemoryTransport::new());
        let provider = EmailProvider::new(transport.clone());

        provider
            .send("a@b.com", "Order Confirmation", "Your order 12345 has been confirmed!")
            .await
            .unwrap();

        let deliveries = transport.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].channel, ChannelType::Email);
        assert_eq!(deliveries[0].message.recipient, "a@b.com");
        assert_eq!(
            deliveries[0].message.title.as_deref(),
            Some("Order Confirmation")
        );
        assert_eq!(
            deliveries[0].message.body,
            "Your order 12345 has been confirmed!"
        );
    }

    #[tokio::test]
    async fn test_malformed_recipient_is_passed_through() {
        let transport = Arc::new(MemoryTransport::new());
        let provider = EmailProvider::new(transport.clone());

        provider.send("not-an-address", "t", "b").await.unwrap();

        assert_eq!(transport.deliveries()[0].message.recipient, "not-an-address");
    }
}
