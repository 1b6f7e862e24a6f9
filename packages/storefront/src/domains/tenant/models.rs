use serde::{Deserialize, Serialize};

use crate::common::BrokerId;

/// Public branding for one storefront, as returned by the
/// `get_public_broker_branding` lookup.
///
/// Display attributes are opaque to the engine - they pass straight through
/// to the rendering layer and are never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerBranding {
    pub id: BrokerId,
    pub business_name: String,
    pub display_name: Option<String>,
    pub website_slug: String,

    // Opaque display attributes
    pub about_text: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub footer_text: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub whatsapp_button_text: Option<String>,
    pub whatsapp_button_color: Option<String>,
    pub address: Option<String>,

    pub is_active: bool,
}

/// Contact sub-resource, fetched lazily through its own lookup.
///
/// Deliberately separate from branding: the upstream guards these fields
/// with a different access policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerContact {
    pub whatsapp_number: Option<String>,
    pub contact_email: Option<String>,
    pub license_id: Option<String>,
}
