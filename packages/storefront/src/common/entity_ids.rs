//! Typed ID definitions for all domain entities.
//!
//! One alias per entity, providing compile-time safety for id usage
//! throughout the engine.
//!
//! # Example
//!
//! ```rust
//! use storefront_core::common::{BrokerId, PropertyId};
//!
//! // These are incompatible types - the compiler prevents mixing them up
//! let broker_id: BrokerId = BrokerId::new();
//! let property_id: PropertyId = PropertyId::new();
//!
//! // This would be a compile error:
//! // let wrong: PropertyId = broker_id;
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Broker entities (tenants publishing a storefront).
pub struct Broker;

/// Marker type for Property entities (listings in a broker's catalog).
pub struct Property;

/// Marker type for Lead entities (captured visitor interest).
pub struct Lead;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Broker entities.
pub type BrokerId = Id<Broker>;

/// Typed ID for Property entities.
pub type PropertyId = Id<Property>;

/// Typed ID for Lead entities.
pub type LeadId = Id<Lead>;
