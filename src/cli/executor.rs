//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::external::{ConsoleTransport, DeliveryTransport};
use crate::models::{ChannelType, DeliveryReceipt};
use crate::services::notifications::NotificationDispatcher;
use bigdecimal::BigDecimal;
use std::str::FromStr;
use std::sync::Arc;

/// Execute a CLI command with the given settings
///
/// Builds a console transport, binds a dispatcher to the requested channel
/// (falling back to the configured default) and runs the requested business
/// operation.
pub async fn execute_command(cli: &Cli, settings: &Settings) -> AppResult<()> {
    let transport: Arc<dyn DeliveryTransport> = Arc::new(ConsoleTransport::new());

    match &cli.command {
        Some(Commands::OrderConfirmation {
            channel,
            recipient,
            order,
        }) => {
            let dispatcher = dispatcher_for(*channel, settings, transport);
            let receipt = dispatcher.send_order_confirmation(recipient, order).await?;
            report(&receipt);
            Ok(())
        }
        Some(Commands::ShippingUpdate {
            channel,
            recipient,
            tracking,
        }) => {
            let dispatcher = dispatcher_for(*channel, settings, transport);
            let receipt = dispatcher.send_shipping_update(recipient, tracking).await?;
            report(&receipt);
            Ok(())
        }
        Some(Commands::PaymentReminder {
            channel,
            recipient,
            amount,
        }) => {
            // Fail fast on a bad amount, before any delivery attempt
            let amount = parse_amount(amount)?;
            let dispatcher = dispatcher_for(*channel, settings, transport);
            let receipt = dispatcher.send_payment_reminder(recipient, &amount).await?;
            report(&receipt);
            Ok(())
        }
        Some(Commands::Demo) | None => run_demo(transport).await,
    }
}

/// Replay the classic demonstration scenarios, one per channel
async fn run_demo(transport: Arc<dyn DeliveryTransport>) -> AppResult<()> {
    tracing::info!("=== Notification dispatch demo ===");

    NotificationDispatcher::email(transport.clone())
        .send_order_confirmation("customer@email.com", "12345")
        .await?;

    NotificationDispatcher::sms(transport.clone())
        .send_order_confirmation("+5511999999999", "12346")
        .await?;

    NotificationDispatcher::push(transport.clone())
        .send_shipping_update("device-token-abc123", "BR123456789")
        .await?;

    NotificationDispatcher::messaging(transport)
        .send_payment_reminder("+5511888888888", &BigDecimal::from(150))
        .await?;

    Ok(())
}

fn dispatcher_for(
    channel: Option<ChannelType>,
    settings: &Settings,
    transport: Arc<dyn DeliveryTransport>,
) -> NotificationDispatcher {
    let channel = channel.unwrap_or(settings.notifications.default_channel);
    NotificationDispatcher::for_channel(channel, transport)
}

fn parse_amount(raw: &str) -> AppResult<BigDecimal> {
    BigDecimal::from_str(raw.trim()).map_err(|e| AppError::InvalidAmount {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn report(receipt: &DeliveryReceipt) {
    tracing::debug!(
        channel = %receipt.channel,
        recipient = %receipt.recipient,
        duration_ms = receipt.duration_ms,
        "delivery attempt completed",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("150.00").unwrap(), BigDecimal::from(150));
        assert_eq!(parse_amount(" -3.5 ").unwrap().to_string(), "-3.5");
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("lots"),
            Err(AppError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount(""),
            Err(AppError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_dispatcher_falls_back_to_configured_default() {
        let mut settings = Settings::default();
        settings.notifications.default_channel = ChannelType::Push;
        let transport: Arc<dyn DeliveryTransport> = Arc::new(ConsoleTransport::new());

        let dispatcher = dispatcher_for(None, &settings, transport.clone());
        assert_eq!(dispatcher.channel(), ChannelType::Push);

        let dispatcher = dispatcher_for(Some(ChannelType::Sms), &settings, transport);
        assert_eq!(dispatcher.channel(), ChannelType::Sms);
    }
}
