//! Notification models shared between the dispatcher, the providers and the
//! transport boundary.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Metadata key carrying the messaging-app rich-template flag
pub const TEMPLATE_METADATA_KEY: &str = "template";

// ============================================================================
// Enums
// ============================================================================

/// Delivery channel for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Sms,
    Push,
    Messaging,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Sms => "sms",
            ChannelType::Push => "push",
            ChannelType::Messaging => "messaging",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(ChannelType::Email),
            "sms" => Ok(ChannelType::Sms),
            "push" => Ok(ChannelType::Push),
            "messaging" => Ok(ChannelType::Messaging),
            _ => Err(format!(
                "Unrecognized channel '{}'. Valid values are: email, sms, push, messaging",
                s
            )),
        }
    }
}

// ============================================================================
// Wire Models
// ============================================================================

/// Message handed to the transport collaborator.
///
/// `title` is `None` for channels whose medium has no subject line (SMS);
/// channel-specific flags travel in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Opaque channel-specific address (email address, phone number,
    /// device token); never validated at this layer
    pub recipient: String,
    /// Message title/subject (omitted by channels without one)
    pub title: Option<String>,
    /// Message body/content (required)
    pub body: String,
    /// Additional metadata for channel-specific data
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl OutboundMessage {
    pub fn new(recipient: impl Into<String>, title: Option<String>, body: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            title,
            body: body.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry, builder-style
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Result of one delivery attempt through a transport collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Channel the message went out on
    pub channel: ChannelType,
    /// Recipient the transport was handed, verbatim
    pub recipient: String,
    /// Time taken for the delivery attempt in milliseconds
    pub duration_ms: u64,
}
