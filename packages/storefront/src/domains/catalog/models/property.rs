use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{BrokerId, PropertyId};

/// Property - one listing in a broker's public catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub broker_id: BrokerId,

    // Content
    pub title: String,
    pub description: String,
    /// Whole currency units.
    pub price: i64,
    pub property_type: String,    // 'apartment', 'house', 'lot', ...
    pub transaction_kind: String, // 'sale', 'rental'

    // Location
    pub address: String,
    pub neighborhood: String,
    pub city: String,
    pub state_code: String,

    // Numeric facets
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area_m2: i32,
    pub parking_spaces: i32,

    // Catalog placement
    pub is_featured: bool,
    pub views_count: i64,

    // Media
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,

    // Free-text feature tags
    #[serde(default)]
    pub features: Vec<String>,

    /// Human-facing short code. Falls back to the id tail in links and
    /// outbound messages.
    pub property_code: Option<String>,
    /// Link slug; the id is the fallback key.
    pub slug: Option<String>,

    // Visibility
    pub is_active: bool,
    pub status: String, // 'active', 'draft', 'archived'

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Ordered image list for the gallery; falls back to the single main
    /// image when no gallery was uploaded. Empty means "render placeholder".
    pub fn gallery_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images.clone()
        } else {
            self.main_image_url.clone().into_iter().collect()
        }
    }

    /// Human-facing short code; the tail of the id when none was assigned.
    pub fn code(&self) -> String {
        self.property_code
            .clone()
            .unwrap_or_else(|| self.id.short_code())
    }

    /// Key used in public links: slug when present, id otherwise.
    pub fn link_key(&self) -> String {
        self.slug.clone().unwrap_or_else(|| self.id.to_string())
    }

    /// Eligible for the public catalog.
    pub fn is_publishable(&self) -> bool {
        self.is_active && self.status == "active"
    }
}

// =============================================================================
// Enums for type-safe filters
// =============================================================================

/// Transaction kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Sale,
    Rental,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Sale => write!(f, "sale"),
            TransactionKind::Rental => write!(f, "rental"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sale" => Ok(TransactionKind::Sale),
            "rental" => Ok(TransactionKind::Rental),
            _ => Err(anyhow::anyhow!("Invalid transaction kind: {}", s)),
        }
    }
}
