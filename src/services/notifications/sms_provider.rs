//! SMS channel provider implementation.
//!
//! SMS has no subject line, so the title is dropped before the message
//! reaches the transport collaborator (an SMS gateway in a real
//! deployment). This is per-channel policy, not an error.

use super::provider::NotificationProvider;
use crate::error::AppResult;
use crate::external::DeliveryTransport;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// SMS channel provider
#[derive(Clone)]
pub struct SmsProvider {
    transport: Arc<dyn DeliveryTransport>,
}

impl SmsProvider {
    pub fn new(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl NotificationProvider for SmsProvider {
    async fn send(&self, recipient: &str, _title: &str, body: &str) -> AppResult<DeliveryReceipt> {
        // No subject line in the medium; title intentionally dropped
        let message = OutboundMessage::new(recipient, None, body);
        tracing::debug!(provider = self.name(), recipient, "sending sms notification");
        self.transport.deliver(self.channel(), &message).await
    }

    fn channel(&self) -> ChannelType {
        ChannelType::Sms
    }

    fn name(&self) -> &'static str {
        "sms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryTransport;

    #[tokio::test]
    async fn test_sms_never_carries_a_title() {
        let transport = Arc::new(MemoryTransport::new());
        let provider = SmsProvider::new(transport.clone());

        provider
            .send("+5511999999999", "Order Confirmation", "Your order 12346 has been confirmed!")
            .await
            .unwrap();

        let deliveries = transport.deliveries();
        assert_eq!(deliveries[0].channel, ChannelType::Sms);
        assert_eq!(deliveries[0].message.recipient, "+5511999999999");
        assert!(deliveries[0].message.title.is_none());
        assert_eq!(
            deliveries[0].message.body,
            "Your order 12346 has been confirmed!"
        );
    }
}
