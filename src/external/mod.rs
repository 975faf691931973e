//! Transport collaborators for message delivery.
//!
//! Real delivery (SMTP, SMS gateway, push service, messaging-app API) lives
//! behind the `DeliveryTransport` trait; this crate bundles a console
//! transport for interactive use and an in-memory one for tests.

mod console;
mod memory;
mod transport;

pub use console::ConsoleTransport;
pub use memory::{MemoryTransport, RecordedDelivery};
pub use transport::DeliveryTransport;
