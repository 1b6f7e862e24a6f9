//! Shared fixtures for integration tests.

use std::sync::Arc;

use chrono::{Duration, Utc};

use storefront_core::common::{BrokerId, PropertyId};
use storefront_core::domains::catalog::models::Property;
use storefront_core::domains::tenant::models::{BrokerBranding, BrokerContact};
use storefront_core::kernel::test_dependencies::MemoryDirectory;
use storefront_core::kernel::{EngineDeps, MemoryLocalStore};

pub fn branding(broker_id: BrokerId, slug: &str) -> BrokerBranding {
    BrokerBranding {
        id: broker_id,
        business_name: "Seaside Realty".to_string(),
        display_name: None,
        website_slug: slug.to_string(),
        about_text: None,
        logo_url: None,
        primary_color: Some("#2563eb".to_string()),
        secondary_color: None,
        footer_text: None,
        hero_title: None,
        hero_subtitle: None,
        whatsapp_button_text: None,
        whatsapp_button_color: None,
        address: None,
        is_active: true,
    }
}

pub fn contact() -> BrokerContact {
    BrokerContact {
        whatsapp_number: Some("+55 48 99999-0000".to_string()),
        contact_email: Some("hello@seaside.example".to_string()),
        license_id: Some("12345-F".to_string()),
    }
}

/// A publishable property. `age_minutes` pushes `created_at` into the past
/// so insertion order and recency order can differ in tests.
pub fn property(broker_id: BrokerId, title: &str, featured: bool, age_minutes: i64) -> Property {
    let created_at = Utc::now() - Duration::minutes(age_minutes);
    Property {
        id: PropertyId::new(),
        broker_id,
        title: title.to_string(),
        description: String::new(),
        price: 450_000,
        property_type: "apartment".to_string(),
        transaction_kind: "sale".to_string(),
        address: "100 Main Ave".to_string(),
        neighborhood: "Downtown".to_string(),
        city: "Porto Alegre".to_string(),
        state_code: "RS".to_string(),
        bedrooms: 2,
        bathrooms: 1,
        area_m2: 80,
        parking_spaces: 1,
        is_featured: featured,
        views_count: 0,
        main_image_url: None,
        images: Vec::new(),
        features: Vec::new(),
        property_code: None,
        slug: None,
        is_active: true,
        status: "active".to_string(),
        created_at,
        updated_at: created_at,
    }
}

pub fn deps_with(directory: Arc<MemoryDirectory>) -> EngineDeps {
    EngineDeps::new(directory, Arc::new(MemoryLocalStore::new()))
}
