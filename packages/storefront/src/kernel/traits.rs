// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Business logic
// (resolve flows, filtering, lead capture) lives in domain functions that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseDirectory, BaseLocalStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{BrokerId, LeadId, PropertyId};
use crate::domains::catalog::models::Property;
use crate::domains::leads::NewLead;
use crate::domains::tenant::models::{BrokerBranding, BrokerContact};

// =============================================================================
// Directory Trait (Infrastructure - the hosted data store, read-mostly)
// =============================================================================

#[async_trait]
pub trait BaseDirectory: Send + Sync {
    /// Resolve public branding for a storefront slug. `None` means the
    /// storefront does not exist or is unpublished - not a fault.
    async fn broker_branding(&self, slug: &str) -> Result<Option<BrokerBranding>>;

    /// Resolve the contact sub-resource for a slug. Fetched separately from
    /// branding - the upstream exposes it under a different access policy.
    async fn broker_contact(&self, slug: &str) -> Result<Option<BrokerContact>>;

    /// Publishable catalog for one broker: active + published only, ordered
    /// featured-first then newest-first by the backend. Never re-sorted here.
    async fn list_properties(&self, broker_id: BrokerId) -> Result<Vec<Property>>;

    /// Insert a lead record. Failure surfaces to the visitor as a notice.
    async fn create_lead(&self, lead: &NewLead) -> Result<LeadId>;

    /// Write an updated view counter. Last write wins; views are telemetry.
    async fn bump_views(&self, property_id: PropertyId, views: i64) -> Result<()>;
}

// =============================================================================
// Local Store Trait (Infrastructure - client-local persistence)
// =============================================================================

/// Client-local key/value persistence (favorites survive reloads).
///
/// Implementations must be cheap and synchronous. Callers treat failures as
/// an unavailable environment and degrade to session-only state.
pub trait BaseLocalStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&self, key: &str, value: &str) -> Result<()>;
}
