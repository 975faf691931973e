//! Core delivery transport trait.

use crate::error::AppResult;
use crate::models::{ChannelType, DeliveryReceipt, OutboundMessage};
use async_trait::async_trait;

/// Trait for transport collaborators (SMTP client, SMS gateway, push
/// service, messaging-app API).
///
/// The dispatcher's contract with a transport: pass the rendered
/// `OutboundMessage` untouched and expect either a receipt or a typed
/// delivery error. Address validation, retries and provider
/// authentication all live behind this boundary, never in front of it.
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All transports must be Send + Sync for use in async contexts.
#[async_trait]
pub trait DeliveryTransport: Send + Sync {
    /// Performs one delivery attempt
    ///
    /// # Arguments
    /// * `channel` - The channel the message goes out on
    /// * `message` - The rendered message, with recipient and body verbatim
    ///
    /// # Returns
    /// Receipt for the attempt, or `AppError::DeliveryFailed` /
    /// `AppError::InvalidRecipient` from transports that can fail
    async fn deliver(
        &self,
        channel: ChannelType,
        message: &OutboundMessage,
    ) -> AppResult<DeliveryReceipt>;

    /// Returns the transport name for logging/debugging
    fn name(&self) -> &'static str;
}
