//! Supabase-backed implementation of [`BaseDirectory`].
//!
//! The hosted backend exposes the public branding/contact lookups as RPC
//! functions (row-level policies hide everything else from the anon key) and
//! the catalog/lead tables through PostgREST.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use supabase::SupabaseClient;
use tracing::debug;

use crate::common::{BrokerId, LeadId, PropertyId};
use crate::domains::catalog::models::Property;
use crate::domains::leads::NewLead;
use crate::domains::tenant::models::{BrokerBranding, BrokerContact};

use super::traits::BaseDirectory;

pub struct SupabaseDirectory {
    client: SupabaseClient,
}

impl SupabaseDirectory {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseDirectory for SupabaseDirectory {
    async fn broker_branding(&self, slug: &str) -> Result<Option<BrokerBranding>> {
        debug!(slug, "resolving broker branding");
        let rows: Vec<BrokerBranding> = self
            .client
            .rpc(
                "get_public_broker_branding",
                &json!({ "broker_website_slug": slug }),
            )
            .await
            .context("broker branding lookup failed")?;
        Ok(rows.into_iter().next())
    }

    async fn broker_contact(&self, slug: &str) -> Result<Option<BrokerContact>> {
        debug!(slug, "resolving broker contact");
        let rows: Vec<BrokerContact> = self
            .client
            .rpc(
                "get_public_broker_contact",
                &json!({ "broker_website_slug": slug }),
            )
            .await
            .context("broker contact lookup failed")?;
        Ok(rows.into_iter().next())
    }

    async fn list_properties(&self, broker_id: BrokerId) -> Result<Vec<Property>> {
        debug!(%broker_id, "loading catalog");
        let broker = format!("eq.{broker_id}");
        let rows: Vec<Property> = self
            .client
            .select(
                "properties",
                &[
                    ("select", "*"),
                    ("broker_id", broker.as_str()),
                    ("is_active", "eq.true"),
                    ("status", "eq.active"),
                    ("order", "is_featured.desc,created_at.desc"),
                ],
            )
            .await
            .context("catalog fetch failed")?;
        Ok(rows)
    }

    async fn create_lead(&self, lead: &NewLead) -> Result<LeadId> {
        #[derive(Deserialize)]
        struct InsertedLead {
            id: LeadId,
        }

        debug!(property_id = %lead.property_id, "creating lead");
        let rows: Vec<InsertedLead> = self
            .client
            .insert("leads", lead)
            .await
            .context("lead submission failed")?;
        rows.into_iter()
            .next()
            .map(|row| row.id)
            .context("lead insert returned no row")
    }

    async fn bump_views(&self, property_id: PropertyId, views: i64) -> Result<()> {
        let id = format!("eq.{property_id}");
        self.client
            .update(
                "properties",
                &[("id", id.as_str())],
                &json!({ "views_count": views }),
            )
            .await
            .context("view counter update failed")
    }
}
