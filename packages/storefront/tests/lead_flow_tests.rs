//! Tests for the contact funnel: contact cache, lead capture, view counter.

mod common;

use std::sync::Arc;

use storefront_core::common::BrokerId;
use storefront_core::domains::leads::{
    contact_link, interest_message, submit_interest, ClientPlatform, NewLead, ViewCounter,
    LEAD_SOURCE,
};
use storefront_core::domains::tenant::ContactCache;
use storefront_core::kernel::test_dependencies::MemoryDirectory;

use common::{branding, contact, deps_with, property};

#[tokio::test]
async fn contact_is_fetched_once_and_cached_for_the_session() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    directory.add_broker(branding(broker_id, "seaside"), Some(contact()));

    let deps = deps_with(directory.clone());
    let mut cache = ContactCache::new();

    let first = cache.resolve(&deps, "seaside").await.unwrap().unwrap();
    let second = cache.resolve(&deps, "seaside").await.unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(directory.contact_lookups(), 1);
}

#[tokio::test]
async fn failed_contact_fetch_is_not_cached() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    directory.add_broker(branding(broker_id, "seaside"), Some(contact()));
    directory.fail_next();

    let deps = deps_with(directory.clone());
    let mut cache = ContactCache::new();

    assert!(cache.resolve(&deps, "seaside").await.is_err());
    assert!(cache.cached().is_none());

    // The retry reaches the backend and sticks.
    let retried = cache.resolve(&deps, "seaside").await.unwrap();
    assert!(retried.is_some());
    assert_eq!(directory.contact_lookups(), 2);
}

#[tokio::test]
async fn submitted_lead_carries_the_public_site_provenance() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    directory.add_broker(branding(broker_id, "seaside"), None);
    let listing = property(broker_id, "Apto Praia", false, 1);

    let deps = deps_with(directory.clone());
    let lead = NewLead::anonymous(broker_id, listing.id);
    submit_interest(&deps, lead).await.unwrap();

    let stored = directory.leads();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].source, LEAD_SOURCE);
    assert_eq!(stored[0].property_id, listing.id);
}

#[tokio::test]
async fn failed_lead_submission_surfaces_to_the_caller() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    directory.fail_next();

    let deps = deps_with(directory.clone());
    let listing = property(broker_id, "Apto Praia", false, 1);
    let lead = NewLead::anonymous(broker_id, listing.id);

    assert!(submit_interest(&deps, lead).await.is_err());
    assert!(directory.leads().is_empty());
}

#[tokio::test]
async fn views_are_recorded_once_per_page_load() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    let mut listing = property(broker_id, "Apto Praia", false, 1);
    listing.views_count = 41;

    let deps = deps_with(directory.clone());
    let mut counter = ViewCounter::new();

    assert_eq!(counter.record(&deps, &listing).await, 42);
    // A re-render of the same page load does not double count.
    assert_eq!(counter.record(&deps, &listing).await, 42);
    assert_eq!(directory.views_of(listing.id), Some(42));

    // A fresh page load counts again, last write wins.
    let mut next_load = ViewCounter::new();
    listing.views_count = 42;
    assert_eq!(next_load.record(&deps, &listing).await, 43);
    assert_eq!(directory.views_of(listing.id), Some(43));
}

#[tokio::test]
async fn failed_view_bump_still_renders_a_count() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    directory.fail_next();

    let deps = deps_with(directory.clone());
    let listing = property(broker_id, "Apto Praia", false, 1);
    let mut counter = ViewCounter::new();

    // The write failed but the page shows the local count, and the guard
    // keeps re-renders from retrying.
    assert_eq!(counter.record(&deps, &listing).await, 1);
    assert_eq!(directory.views_of(listing.id), None);
    assert_eq!(counter.record(&deps, &listing).await, 1);
}

#[tokio::test]
async fn whatsapp_link_is_built_from_cached_contact() {
    let broker_id = BrokerId::new();
    let directory = Arc::new(MemoryDirectory::new());
    directory.add_broker(branding(broker_id, "seaside"), Some(contact()));

    let deps = deps_with(directory);
    let mut cache = ContactCache::new();
    let contact = cache.resolve(&deps, "seaside").await.unwrap().unwrap();

    let listing = property(broker_id, "Apto Praia", false, 1);
    let message = interest_message(&listing, "https://example.test/seaside/apto-praia");
    let link = contact_link(
        contact.whatsapp_number.as_deref().unwrap_or_default(),
        &message,
        ClientPlatform::Mobile,
    )
    .expect("contact number should produce a link");

    assert!(link.primary.starts_with("whatsapp://send?phone=5548999990000"));
    assert!(link.fallback.starts_with("https://wa.me/5548999990000"));
    assert!(message.contains("Apto Praia"));
    assert!(message.contains(&listing.code()));
}
