//! Client-local favorite set.
//!
//! Global across storefronts (the key is not tenant-scoped) and mutated only
//! by toggling. Persistence failures degrade to session-only membership -
//! no favorites operation ever fails.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::warn;

use crate::common::PropertyId;
use crate::kernel::BaseLocalStore;

const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore {
    store: Arc<dyn BaseLocalStore>,
    ids: BTreeSet<PropertyId>,
}

impl FavoritesStore {
    /// Load the saved set. An unreadable or absent store starts empty; the
    /// session still works, it just won't survive a reload.
    pub fn load(store: Arc<dyn BaseLocalStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<PropertyId>>(&raw).unwrap_or_else(|error| {
                warn!(%error, "favorites payload unreadable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "local storage unavailable, favorites are session-only");
                Vec::new()
            }
        };
        Self {
            store,
            ids: ids.into_iter().collect(),
        }
    }

    pub fn is_favorited(&self, id: PropertyId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership and return the new membership. Its own inverse: two
    /// toggles of the same id restore the original set.
    pub fn toggle(&mut self, id: PropertyId) -> bool {
        let now_favorited = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist();
        now_favorited
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) {
        let ids: Vec<PropertyId> = self.ids.iter().copied().collect();
        let raw = match serde_json::to_string(&ids) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "favorites not serializable, keeping in-memory set");
                return;
            }
        };
        if let Err(error) = self.store.put(FAVORITES_KEY, &raw) {
            warn!(%error, "could not persist favorites, keeping in-memory set");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::FailingLocalStore;
    use crate::kernel::MemoryLocalStore;

    #[test]
    fn toggle_is_its_own_inverse() {
        let store = Arc::new(MemoryLocalStore::new());
        let mut favorites = FavoritesStore::load(store);
        let id = PropertyId::new();

        assert!(!favorites.is_favorited(id));
        favorites.toggle(id);
        favorites.toggle(id);
        assert!(!favorites.is_favorited(id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggle_reports_new_membership() {
        let store = Arc::new(MemoryLocalStore::new());
        let mut favorites = FavoritesStore::load(store);
        let id = PropertyId::new();

        assert!(favorites.toggle(id));
        assert!(!favorites.toggle(id));
    }

    #[test]
    fn set_survives_a_reload() {
        let store: Arc<MemoryLocalStore> = Arc::new(MemoryLocalStore::new());
        let id = PropertyId::new();

        let mut favorites = FavoritesStore::load(store.clone());
        favorites.toggle(id);
        drop(favorites);

        let reloaded = FavoritesStore::load(store);
        assert!(reloaded.is_favorited(id));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn unavailable_storage_degrades_to_session_only() {
        let mut favorites = FavoritesStore::load(Arc::new(FailingLocalStore));
        let id = PropertyId::new();

        // Toggles still work within the session.
        favorites.toggle(id);
        assert!(favorites.is_favorited(id));
        favorites.toggle(id);
        assert!(!favorites.is_favorited(id));
    }

    #[test]
    fn corrupt_payload_starts_empty() {
        let store = Arc::new(MemoryLocalStore::new());
        store.put(FAVORITES_KEY, "not json at all").unwrap();

        let favorites = FavoritesStore::load(store);
        assert!(favorites.is_empty());
    }
}
