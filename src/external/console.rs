//! Console transport implementation.
//!
//! Emits one structured delivery record per call via `tracing` instead of
//! reaching a real provider. Never fails.

use super::transport::DeliveryTransport;
use crate::error::AppResult;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;
use std::time::Instant;

/// Transport that writes delivery records to the log output
#[derive(Debug, Clone, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeliveryTransport for ConsoleTransport {
    async fn deliver(
        &self,
        channel: ChannelType,
        message: &OutboundMessage,
    ) -> AppResult<DeliveryReceipt> {
        let start = Instant::now();

        let metadata = serde_json::to_string(&message.metadata).unwrap_or_default();
        match &message.title {
            Some(title) => tracing::info!(
                channel = %channel,
                recipient = %message.recipient,
                title = %title,
                %metadata,
                "{}",
                message.body,
            ),
            None => tracing::info!(
                channel = %channel,
                recipient = %message.recipient,
                %metadata,
                "{}",
                message.body,
            ),
        }

        Ok(DeliveryReceipt {
            channel,
            recipient: message.recipient.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
