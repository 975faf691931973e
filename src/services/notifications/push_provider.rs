//! Push channel provider implementation.
//!
//! Targets a device token and forwards the title as the notification
//! heading; delivery goes through the injected transport collaborator
//! (APNs/FCM client in a real deployment).

use super::provider::NotificationProvider;
use crate::error::AppResult;
use crate::external::DeliveryTransport;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// Push channel provider
#[derive(Clone)]
pub struct PushProvider {
    transport: Arc<dyn DeliveryTransport>,
}

impl PushProvider {
    pub fn new(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl NotificationProvider for PushProvider {
    async fn send(&self, recipient: &str, title: &str, body: &str) -> AppResult<DeliveryReceipt> {
        let message = OutboundMessage::new(recipient, Some(title.to_string()), body);
        tracing::debug!(provider = self.name(), recipient, "sending push notification");
        self.transport.deliver(self.channel(), &message).await
    }

    fn channel(&self) -> ChannelType {
        ChannelType::Push
    }

    fn name(&self) -> &'static str {
        "push"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryTransport;

    #[tokio::test]
    async fn test_push_forwards_title_and_device_token() {
        let transport = Arc::new(MemoryTransport::new());
        let provider = PushProvider::new(transport.clone());

        provider
            .send("device-token-abc123", "Order Shipped", "Tracking code: BR123456789")
            .await
            .unwrap();

        let deliveries = transport.deliveries();
        assert_eq!(deliveries[0].channel, ChannelType::Push);
        assert_eq!(deliveries[0].message.recipient, "device-token-abc123");
        assert_eq!(deliveries[0].message.title.as_deref(), Some("Order Shipped"));
        assert_eq!(deliveries[0].message.body, "Tracking code: BR123456789");
    }
}
