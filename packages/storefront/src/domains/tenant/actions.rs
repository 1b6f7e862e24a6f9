//! Tenant resolution actions.

use anyhow::Result;
use tracing::debug;

use crate::kernel::EngineDeps;

use super::models::{BrokerBranding, BrokerContact};

/// Resolve public branding for a storefront slug.
///
/// Exactly one lookup per navigation; callers re-resolve on every slug
/// change rather than caching across slugs. `Ok(None)` routes to the
/// not-found view.
pub async fn resolve_branding(deps: &EngineDeps, slug: &str) -> Result<Option<BrokerBranding>> {
    deps.directory().broker_branding(slug).await
}

/// Session-scoped cache for the lazily fetched contact sub-resource.
///
/// The first successful fetch is kept for the rest of the session. Failed
/// fetches are not cached, so a later user action can still succeed.
#[derive(Debug, Default)]
pub struct ContactCache {
    contact: Option<BrokerContact>,
}

impl ContactCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self) -> Option<&BrokerContact> {
        self.contact.as_ref()
    }

    /// Fetch-or-return-cached. `Ok(None)` means the broker exposes no
    /// contact details - absence, not failure.
    pub async fn resolve(
        &mut self,
        deps: &EngineDeps,
        slug: &str,
    ) -> Result<Option<BrokerContact>> {
        if let Some(contact) = &self.contact {
            return Ok(Some(contact.clone()));
        }
        let fetched = deps.directory().broker_contact(slug).await?;
        if let Some(contact) = &fetched {
            debug!(slug, "contact details cached for session");
            self.contact = Some(contact.clone());
        }
        Ok(fetched)
    }
}
