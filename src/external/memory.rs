//! In-memory recording transport.
//!
//! Captures every delivered message for later inspection. Used by the test
//! suite in place of console capture, and by dry runs.

use super::transport::DeliveryTransport;
use crate::error::AppResult;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Instant;

/// One captured delivery
#[derive(Debug, Clone)]
pub struct RecordedDelivery {
    pub channel: ChannelType,
    pub message: OutboundMessage,
}

/// Transport that records deliveries instead of performing them
#[derive(Debug, Default)]
pub struct MemoryTransport {
    deliveries: Mutex<Vec<RecordedDelivery>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in order
    pub fn deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries
            .lock()
            .expect("memory transport lock poisoned")
            .clone()
    }

    /// Number of deliveries recorded so far
    pub fn len(&self) -> usize {
        self.deliveries
            .lock()
            .expect("memory transport lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DeliveryTransport for MemoryTransport {
    async fn deliver(
        &self,
        channel: ChannelType,
        message: &OutboundMessage,
    ) -> AppResult<DeliveryReceipt> {
        let start = Instant::now();

        self.deliveries
            .lock()
            .expect("memory transport lock poisoned")
            .push(RecordedDelivery {
                channel,
                message: message.clone(),
            });

        Ok(DeliveryReceipt {
            channel,
            recipient: message.recipient.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
