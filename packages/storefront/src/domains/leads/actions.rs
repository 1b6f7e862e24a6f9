//! Lead capture and view telemetry.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::{BrokerId, LeadId, PropertyId};
use crate::domains::catalog::models::Property;
use crate::kernel::EngineDeps;

/// Provenance tag recorded on every lead captured by the public storefront.
pub const LEAD_SOURCE: &str = "public_site";

/// Lead record as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    pub broker_id: BrokerId,
    pub property_id: PropertyId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: String,
}

impl NewLead {
    /// Anonymous interest registered by a visitor who has not filled a form
    /// (WhatsApp click, contact button).
    pub fn anonymous(broker_id: BrokerId, property_id: PropertyId) -> Self {
        Self {
            broker_id,
            property_id,
            name: "Site visitor".to_string(),
            email: "visitor@example.com".to_string(),
            message: "Interest registered via the public site".to_string(),
            source: LEAD_SOURCE.to_string(),
        }
    }
}

/// Submit a lead. One round trip, no automatic retry; the caller turns an
/// `Err` into a dismissible notice and lets the visitor try again.
pub async fn submit_interest(deps: &EngineDeps, lead: NewLead) -> Result<LeadId> {
    debug!(property_id = %lead.property_id, source = %lead.source, "submitting lead");
    deps.directory().create_lead(&lead).await
}

/// One-shot view counter for a single detail-page load.
///
/// Views are approximate telemetry: read-then-write, last write wins, and
/// re-renders within the same load never double count. One `ViewCounter` is
/// created per detail-page mount.
#[derive(Debug, Default)]
pub struct ViewCounter {
    views: Option<i64>,
}

impl ViewCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter once and return the count to display. Later calls
    /// return the same count without touching the backend. A failed write is
    /// logged and swallowed - the page must still render.
    pub async fn record(&mut self, deps: &EngineDeps, property: &Property) -> i64 {
        if let Some(views) = self.views {
            return views;
        }
        let views = property.views_count + 1;
        if let Err(error) = deps.directory().bump_views(property.id, views).await {
            warn!(%error, property_id = %property.id, "view counter update failed");
        }
        self.views = Some(views);
        views
    }
}
