pub mod actions;
pub mod whatsapp;

pub use actions::{submit_interest, NewLead, ViewCounter, LEAD_SOURCE};
pub use whatsapp::{contact_link, interest_message, ClientPlatform, DeepLink};
