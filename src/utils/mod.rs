pub mod currency;

pub use currency::format_amount;
