mod notification;

pub use notification::{ChannelType, DeliveryReceipt, OutboundMessage, TEMPLATE_METADATA_KEY};
