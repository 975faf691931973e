//! Core notification provider trait.
//!
//! This module provides the abstraction for channel providers, allowing
//! easy extension to support different notification channels.

use crate::error::AppResult;
use crate::models::{ChannelType, DeliveryReceipt};
use async_trait::async_trait;

/// Trait for channel providers (email, SMS, push, messaging-app)
///
/// A provider owns one channel's rendering conventions and nothing else:
/// it decides whether the title survives (SMS drops it) and which
/// channel-specific flags to attach, then hands the rendered message to
/// its transport collaborator. Recipients are opaque channel-specific
/// addresses and are never validated here; `recipient` and `body` reach
/// the transport verbatim.
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct EmailProvider {
///     transport: Arc<dyn DeliveryTransport>,
/// }
///
/// #[async_trait]
/// impl NotificationProvider for EmailProvider {
///     async fn send(&self, recipient: &str, title: &str, body: &str) -> AppResult<DeliveryReceipt> {
///         // Render and hand off to self.transport
///     }
///
///     fn channel(&self) -> ChannelType {
///         ChannelType::Email
///     }
///
///     fn name(&self) -> &'static str {
///         "email"
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends a rendered notification to a recipient
    ///
    /// # Arguments
    /// * `recipient` - Opaque channel-specific address, passed through unvalidated
    /// * `title` - Message title; providers for media without a subject line may drop it
    /// * `body` - Message body, passed through verbatim
    ///
    /// # Returns
    /// Receipt from the transport collaborator
    async fn send(&self, recipient: &str, title: &str, body: &str) -> AppResult<DeliveryReceipt>;

    /// Returns the channel this provider serves
    fn channel(&self) -> ChannelType;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}
