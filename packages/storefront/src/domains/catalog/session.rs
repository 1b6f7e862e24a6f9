//! Per-tenant browsing session: resolve, load, filter, reveal.
//!
//! External round trips (branding lookup, catalog fetch) happen once per
//! navigation. Query-state changes re-run the pure filter synchronously over
//! the catalog already in memory; nothing is re-fetched.

use anyhow::Result;
use tracing::{debug, warn};

use crate::common::PropertyId;
use crate::domains::tenant::models::BrokerBranding;
use crate::kernel::EngineDeps;

use super::models::Property;
use super::query::{apply, FilteredCatalog, PropertyFilters, QueryState};
use super::reveal::RevealWindow;

/// What the page shows for the current navigation.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    /// Slug did not resolve - a dedicated view, not a fault.
    NotFound,
    /// An external call failed; the visitor may re-trigger navigation.
    Failed { notice: String },
    Ready {
        branding: BrokerBranding,
        catalog: Vec<Property>,
    },
}

/// Token tying a navigation completion to the request that started it.
/// Monotonic: a completion carrying an older token than the session's
/// current one is stale and gets discarded (last request wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken(u64);

/// Everything a navigation brings back; `None` when the slug is unknown.
pub type StorefrontSnapshot = Option<(BrokerBranding, Vec<Property>)>;

pub struct CatalogSession {
    state: SessionState,
    generation: u64,
    query: QueryState,
    filtered: FilteredCatalog,
    reveal: RevealWindow,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            generation: 0,
            query: QueryState::new(),
            filtered: FilteredCatalog::default(),
            reveal: RevealWindow::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn filtered(&self) -> &FilteredCatalog {
        &self.filtered
    }

    /// The revealed prefix of the regular subset.
    pub fn visible_regular(&self) -> &[Property] {
        let end = self.reveal.visible_of(self.filtered.regular.len());
        &self.filtered.regular[..end]
    }

    pub fn visible_count(&self) -> usize {
        self.reveal.visible_count()
    }

    pub fn has_more_regular(&self) -> bool {
        self.reveal.has_more(self.filtered.regular.len())
    }

    /// Resolve a slug and load its catalog, replacing whatever the session
    /// was showing. Fetch failures land in [`SessionState::Failed`]; they
    /// never propagate.
    pub async fn navigate(&mut self, deps: &EngineDeps, slug: &str) {
        let token = self.begin_navigation();
        let outcome = fetch_storefront(deps, slug).await;
        self.complete_navigation(token, outcome);
    }

    /// Start a navigation. The returned token must accompany the completion;
    /// callers driving fetches themselves (spawned tasks) use this with
    /// [`Self::complete_navigation`] instead of [`Self::navigate`].
    pub fn begin_navigation(&mut self) -> NavToken {
        self.generation += 1;
        self.state = SessionState::Loading;
        NavToken(self.generation)
    }

    /// Apply a completed navigation unless a newer one superseded it.
    /// Returns whether the completion was applied.
    pub fn complete_navigation(
        &mut self,
        token: NavToken,
        outcome: Result<StorefrontSnapshot>,
    ) -> bool {
        if token.0 != self.generation {
            debug!("stale navigation completion discarded");
            return false;
        }

        // Query state is per-tenant: it resets implicitly on navigation.
        self.query = QueryState::new();
        self.reveal.reset();

        match outcome {
            Ok(None) => {
                self.filtered = FilteredCatalog::default();
                self.state = SessionState::NotFound;
            }
            Ok(Some((branding, catalog))) => {
                debug!(
                    slug = %branding.website_slug,
                    listings = catalog.len(),
                    "storefront loaded"
                );
                self.filtered = apply(&catalog, &self.query);
                self.state = SessionState::Ready { branding, catalog };
            }
            Err(error) => {
                warn!(%error, "navigation failed");
                self.filtered = FilteredCatalog::default();
                self.state = SessionState::Failed {
                    notice: error.to_string(),
                };
            }
        }
        true
    }

    /// Replace the search term and re-evaluate.
    pub fn set_term(&mut self, term: &str) {
        self.query.set_term(term);
        self.refilter();
    }

    /// Replace the facet set and re-evaluate.
    pub fn set_filters(&mut self, filters: PropertyFilters) {
        self.query.filters = filters;
        self.refilter();
    }

    /// Reveal the next page of regular listings.
    pub fn expand(&mut self) {
        self.reveal.expand(self.filtered.regular.len());
    }

    /// Grow the reveal window so the given listing is rendered (deep links,
    /// scroll restore). Unknown ids and already-visible targets are no-ops.
    pub fn ensure_visible(&mut self, property_id: PropertyId) {
        if let Some(index) = self
            .filtered
            .regular
            .iter()
            .position(|p| p.id == property_id)
        {
            self.reveal.ensure_visible(index);
        }
    }

    fn refilter(&mut self) {
        let SessionState::Ready { catalog, .. } = &self.state else {
            return;
        };
        let next = apply(catalog, &self.query);
        // The reveal window resets only when the regular subset actually
        // changed identity, not on every re-evaluation.
        let identity_changed = ids(&next.regular) != ids(&self.filtered.regular);
        self.filtered = next;
        if identity_changed {
            self.reveal.reset();
        }
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

/// One navigation's worth of external reads: branding, then the catalog.
/// Split out from [`CatalogSession::navigate`] so a UI loop can run it as a
/// spawned task and feed the result through `complete_navigation`.
pub async fn fetch_storefront(deps: &EngineDeps, slug: &str) -> Result<StorefrontSnapshot> {
    let Some(branding) = deps.directory().broker_branding(slug).await? else {
        return Ok(None);
    };
    let catalog = deps.directory().list_properties(branding.id).await?;
    Ok(Some((branding, catalog)))
}

fn ids(list: &[Property]) -> Vec<PropertyId> {
    list.iter().map(|p| p.id).collect()
}
