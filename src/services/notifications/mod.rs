//! Notification system with pluggable channel providers.
//!
//! The core trait `NotificationProvider` represents one channel's ability
//! to transmit a rendered message to a recipient. Adding a channel means
//! one new provider implementation plus one trivial dispatcher
//! constructor; the business operations in `NotificationDispatcher` are
//! never touched.

mod dispatcher;
mod email_provider;
mod messaging_provider;
mod provider;
mod push_provider;
mod sms_provider;

pub use dispatcher::NotificationDispatcher;
pub use email_provider::EmailProvider;
pub use messaging_provider::MessagingProvider;
pub use provider::NotificationProvider;
pub use push_provider::PushProvider;
pub use sms_provider::SmsProvider;
