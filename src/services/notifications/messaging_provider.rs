//! Messaging-app channel provider implementation.
//!
//! Forwards the title and always flags the message as using the
//! channel's rich template. The flag is a fixed per-channel policy
//! constant; callers cannot vary it.

use super::provider::NotificationProvider;
use crate::error::AppResult;
use crate::external::DeliveryTransport;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage, TEMPLATE_METADATA_KEY};
use async_trait::async_trait;
use std::sync::Arc;

/// Messaging-app channel provider
#[derive(Clone)]
pub struct MessagingProvider {
    transport: Arc<dyn DeliveryTransport>,
}

impl MessagingProvider {
    pub fn new(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl NotificationProvider for MessagingProvider {
    async fn send(&self, recipient: &str, title: &str, body: &str) -> AppResult<DeliveryReceipt> {
        let message = OutboundMessage::new(recipient, Some(title.to_string()), body)
            .with_metadata(TEMPLATE_METADATA_KEY, "true");
        tracing::debug!(provider = self.name(), recipient, "sending messaging notification");
        self.transport.deliver(self.channel(), &message).await
    }

    fn channel(&self) -> ChannelType {
        ChannelType::Messaging
    }

    fn name(&self) -> &'static str {
        "messaging"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryTransport;

    #[tokio::test]
    async fn test_messaging_always_flags_rich_template() {
        let transport = Arc::new(MemoryTransport::new());
        let provider = MessagingProvider::new(transport.clone());

        provider.send("+5511888888888", "Payment Reminder", "any body").await.unwrap();
        provider.send("", "", "").await.unwrap();

        for delivery in transport.deliveries() {
            assert_eq!(delivery.channel, ChannelType::Messaging);
            assert_eq!(
                delivery.message.metadata.get(TEMPLATE_METADATA_KEY).map(String::as_str),
                Some("true")
            );
        }
    }

    #[tokio::test]
    async fn test_messaging_forwards_title() {
        let transport = Arc::new(MemoryTransport::new());
        let provider = MessagingProvider::new(transport.clone());

        provider.send("+5511888888888", "Payment Reminder", "body").await.unwrap();

        assert_eq!(
            transport.deliveries()[0].message.title.as_deref(),
            Some("Payment Reminder")
        );
    }
}
