//! Notification dispatcher for business events.
//!
//! One dispatcher binds exactly one channel provider for life. The three
//! business operations are defined once, here; adding a channel touches
//! one new provider implementation and one constructor below, never this
//! operation logic.

use super::email_provider::EmailProvider;
use super::messaging_provider::MessagingProvider;
use super::provider::NotificationProvider;
use super::push_provider::PushProvider;
use super::sms_provider::SmsProvider;
use crate::error::AppResult;
use crate::external::DeliveryTransport;
use crate::models::{ChannelType, DeliveryReceipt};
use crate::utils::format_amount;
use bigdecimal::BigDecimal;
use std::sync::Arc;

/// Dispatcher pairing the fixed business-event operations with one
/// channel provider, bound at construction and immutable thereafter
#[derive(Clone)]
pub struct NotificationDispatcher {
    provider: Arc<dyn NotificationProvider>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher around an existing provider
    pub fn new(provider: Arc<dyn NotificationProvider>) -> Self {
        Self { provider }
    }

    /// Dispatcher bound to the email channel
    pub fn email(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self::new(Arc::new(EmailProvider::new(transport)))
    }

    /// Dispatcher bound to the SMS channel
    pub fn sms(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self::new(Arc::new(SmsProvider::new(transport)))
    }

    /// Dispatcher bound to the push channel
    pub fn push(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self::new(Arc::new(PushProvider::new(transport)))
    }

    /// Dispatcher bound to the messaging-app channel
    pub fn messaging(transport: Arc<dyn DeliveryTransport>) -> Self {
        Self::new(Arc::new(MessagingProvider::new(transport)))
    }

    /// Creates a dispatcher for the given channel.
    ///
    /// Channel selection happens here, at construction time, and nowhere
    /// else; the business operations below are channel-agnostic.
    pub fn for_channel(channel: ChannelType, transport: Arc<dyn DeliveryTransport>) -> Self {
        match channel {
            ChannelType::Email => Self::email(transport),
            ChannelType::Sms => Self::sms(transport),
            ChannelType::Push => Self::push(transport),
            ChannelType::Messaging => Self::messaging(transport),
        }
    }

    /// Channel this dispatcher is bound to
    pub fn channel(&self) -> ChannelType {
        self.provider.channel()
    }

    // ========================================================================
    // Business Operations
    // ========================================================================

    /// Notifies the customer that their order was confirmed.
    ///
    /// `order_number` is interpolated as-is; empty strings are accepted.
    pub async fn send_order_confirmation(
        &self,
        recipient: &str,
        order_number: &str,
    ) -> AppResult<DeliveryReceipt> {
        let body = format!("Your order {} has been confirmed!", order_number);
        self.provider
            .send(recipient, "Order Confirmation", &body)
            .await
    }

    /// Notifies the customer that their order shipped.
    pub async fn send_shipping_update(
        &self,
        recipient: &str,
        tracking_code: &str,
    ) -> AppResult<DeliveryReceipt> {
        let body = format!(
            "Your order has shipped! Tracking code: {}",
            tracking_code
        );
        self.provider.send(recipient, "Order Shipped", &body).await
    }

    /// Reminds the customer of a pending payment.
    ///
    /// The amount is rendered with exactly two fraction digits and
    /// thousands separators; zero and negative amounts format normally.
    pub async fn send_payment_reminder(
        &self,
        recipient: &str,
        amount: &BigDecimal,
    ) -> AppResult<DeliveryReceipt> {
        let body = format!(
            "You have a pending payment of $ {}",
            format_amount(amount)
        );
        self.provider
            .send(recipient, "Payment Reminder", &body)
            .await
    }
}
