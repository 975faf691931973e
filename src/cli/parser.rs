//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Environment;
use crate::models::ChannelType;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// A multi-channel customer notification dispatcher
#[derive(Parser, Debug)]
#[command(name = "courier-rs")]
#[command(about = "A multi-channel customer notification dispatcher")]
#[command(long_about = "
Courier-rs dispatches customer-facing notifications (order confirmations,
shipping updates, payment reminders) over interchangeable delivery
channels: email, SMS, push and messaging-app.

EXAMPLES:
    # Send an order confirmation by email
    courier-rs order-confirmation --channel email --recipient a@b.com --order 12345

    # Send a shipping update as a push notification
    courier-rs shipping-update --channel push --recipient device-token-abc123 --tracking BR123456789

    # Send a payment reminder through the messaging-app channel
    courier-rs payment-reminder --channel messaging --recipient +5511888888888 --amount 150.00

    # Replay the built-in demonstration scenarios
    courier-rs demo

    # Use a custom configuration file
    courier-rs --config /path/to/config.toml demo

For more information about configuration options, see the documentation.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the layered
    /// configuration directory. The file should be in TOML format.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration.
    /// Available values: development (dev), test, staging, production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Notify a customer that their order was confirmed
    OrderConfirmation {
        /// Delivery channel; defaults to notifications.default_channel
        #[arg(long, value_enum)]
        channel: Option<ChannelType>,

        /// Channel-specific recipient address (email address, phone
        /// number, device token); passed through unvalidated
        #[arg(short, long)]
        recipient: String,

        /// Order number to interpolate into the message body
        #[arg(short, long)]
        order: String,
    },

    /// Notify a customer that their order shipped
    ShippingUpdate {
        /// Delivery channel; defaults to notifications.default_channel
        #[arg(long, value_enum)]
        channel: Option<ChannelType>,

        /// Channel-specific recipient address
        #[arg(short, long)]
        recipient: String,

        /// Tracking code to interpolate into the message body
        #[arg(short, long)]
        tracking: String,
    },

    /// Remind a customer of a pending payment
    PaymentReminder {
        /// Delivery channel; defaults to notifications.default_channel
        #[arg(long, value_enum)]
        channel: Option<ChannelType>,

        /// Channel-specific recipient address
        #[arg(short, long)]
        recipient: String,

        /// Amount due, as a decimal string (e.g. 150.00)
        #[arg(short, long)]
        amount: String,
    },

    /// Replay the built-in demonstration scenarios across all channels
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_payment_reminder() {
        let cli = Cli::parse_from([
            "courier-rs",
            "payment-reminder",
            "--channel",
            "messaging",
            "--recipient",
            "+5511888888888",
            "--amount",
            "150.00",
        ]);

        match cli.command {
            Some(Commands::PaymentReminder {
                channel,
                recipient,
                amount,
            }) => {
                assert_eq!(channel, Some(ChannelType::Messaging));
                assert_eq!(recipient, "+5511888888888");
                assert_eq!(amount, "150.00");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_channel_flag_is_optional() {
        let cli = Cli::parse_from([
            "courier-rs",
            "order-confirmation",
            "--recipient",
            "a@b.com",
            "--order",
            "12345",
        ]);

        match cli.command {
            Some(Commands::OrderConfirmation { channel, .. }) => assert!(channel.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["courier-rs", "--verbose", "--quiet", "demo"]).is_err());
    }
}
