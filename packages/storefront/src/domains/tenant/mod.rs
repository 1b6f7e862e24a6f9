pub mod actions;
pub mod models;

pub use actions::{resolve_branding, ContactCache};
pub use models::{BrokerBranding, BrokerContact};
