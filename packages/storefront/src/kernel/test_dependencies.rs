//! In-memory dependencies for tests.
//!
//! [`MemoryDirectory`] mirrors the hosted backend closely enough for
//! session-level tests: lookup absence becomes `None`, the catalog is served
//! in backend order, and scripted failures simulate transient outages.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::common::{BrokerId, LeadId, PropertyId};
use crate::domains::catalog::models::Property;
use crate::domains::leads::NewLead;
use crate::domains::tenant::models::{BrokerBranding, BrokerContact};

use super::traits::{BaseDirectory, BaseLocalStore};

#[derive(Default)]
pub struct MemoryDirectory {
    brandings: Mutex<HashMap<String, BrokerBranding>>,
    contacts: Mutex<HashMap<String, BrokerContact>>,
    properties: Mutex<Vec<Property>>,
    leads: Mutex<Vec<NewLead>>,
    views: Mutex<HashMap<PropertyId, i64>>,
    fail_next: AtomicBool,
    contact_lookups: AtomicUsize,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_broker(&self, branding: BrokerBranding, contact: Option<BrokerContact>) {
        let slug = branding.website_slug.clone();
        self.brandings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(slug.clone(), branding);
        if let Some(contact) = contact {
            self.contacts
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(slug, contact);
        }
    }

    pub fn add_property(&self, property: Property) {
        self.properties
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(property);
    }

    /// Make the next directory call fail once, like a transient outage.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn contact_lookups(&self) -> usize {
        self.contact_lookups.load(Ordering::SeqCst)
    }

    pub fn leads(&self) -> Vec<NewLead> {
        self.leads.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn views_of(&self, property_id: PropertyId) -> Option<i64> {
        self.views
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&property_id)
            .copied()
    }

    fn check_outage(&self) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            bail!("scripted outage");
        }
        Ok(())
    }
}

#[async_trait]
impl BaseDirectory for MemoryDirectory {
    async fn broker_branding(&self, slug: &str) -> Result<Option<BrokerBranding>> {
        self.check_outage()?;
        Ok(self
            .brandings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(slug)
            .cloned())
    }

    async fn broker_contact(&self, slug: &str) -> Result<Option<BrokerContact>> {
        self.contact_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_outage()?;
        Ok(self
            .contacts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(slug)
            .cloned())
    }

    async fn list_properties(&self, broker_id: BrokerId) -> Result<Vec<Property>> {
        self.check_outage()?;
        let mut rows: Vec<Property> = self
            .properties
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|p| p.broker_id == broker_id && p.is_publishable())
            .cloned()
            .collect();
        // Backend ordering: featured first, then newest. Stable, so
        // insertion order breaks ties - same contract the engine relies on.
        rows.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn create_lead(&self, lead: &NewLead) -> Result<LeadId> {
        self.check_outage()?;
        self.leads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(lead.clone());
        Ok(LeadId::new())
    }

    async fn bump_views(&self, property_id: PropertyId, views: i64) -> Result<()> {
        self.check_outage()?;
        self.views
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(property_id, views);
        Ok(())
    }
}

/// Local store whose environment is permanently unavailable.
pub struct FailingLocalStore;

impl BaseLocalStore for FailingLocalStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        bail!("storage unavailable")
    }

    fn put(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("storage unavailable")
    }
}
