//! Faceted filter/search over the loaded catalog.
//!
//! `apply` is a pure function of (catalog, query state): no hidden state, no
//! re-sorting, safe to re-run on every keystroke. The catalog keeps the
//! order the loader delivered it in; filtering only ever removes rows.

use serde::{Deserialize, Serialize};

use super::models::{Property, TransactionKind};

/// Longest search term the engine will look at. Anything beyond this is
/// dropped during sanitization, never rejected with an error.
pub const MAX_TERM_LEN: usize = 100;

/// One browsing session's filter/search inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    term: String,
    pub filters: PropertyFilters,
}

/// Facet set; an unset facet imposes no constraint. All set facets must
/// hold together (conjunction).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilters {
    pub property_type: Option<String>,
    pub transaction_kind: Option<TransactionKind>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<i32>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search term. Input is plain data: control characters are
    /// stripped and the length capped before the term ever reaches a
    /// predicate.
    pub fn set_term(&mut self, term: &str) {
        self.term = term
            .trim()
            .chars()
            .filter(|c| !c.is_control())
            .take(MAX_TERM_LEN)
            .collect();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// True iff the term is non-empty or any facet is set. UI affordance
    /// only - `apply` does not consult it.
    pub fn has_active_filters(&self) -> bool {
        !self.term.is_empty() || self.filters != PropertyFilters::default()
    }
}

/// Partition of the passing set, both halves in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredCatalog {
    pub featured: Vec<Property>,
    pub regular: Vec<Property>,
}

/// Evaluate the query against the loaded catalog.
pub fn apply(catalog: &[Property], query: &QueryState) -> FilteredCatalog {
    let needle = query.term().to_lowercase();
    let mut result = FilteredCatalog::default();
    for property in catalog {
        if !matches_term(property, &needle) || !matches_facets(property, &query.filters) {
            continue;
        }
        if property.is_featured {
            result.featured.push(property.clone());
        } else {
            result.regular.push(property.clone());
        }
    }
    result
}

fn matches_term(property: &Property, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        property.title.as_str(),
        property.address.as_str(),
        property.neighborhood.as_str(),
        property.city.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
        || property.code().to_lowercase().contains(needle)
}

fn matches_facets(property: &Property, filters: &PropertyFilters) -> bool {
    if let Some(kind) = filters.transaction_kind {
        if property.transaction_kind != kind.to_string() {
            return false;
        }
    }
    if let Some(property_type) = &filters.property_type {
        if !property.property_type.eq_ignore_ascii_case(property_type) {
            return false;
        }
    }
    if let Some(min) = filters.min_price {
        if property.price < min {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if property.price > max {
            return false;
        }
    }
    if let Some(min) = filters.min_bedrooms {
        if property.bedrooms < min {
            return false;
        }
    }
    if let Some(min) = filters.min_bathrooms {
        if property.bathrooms < min {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{BrokerId, PropertyId};
    use chrono::Utc;

    fn property(title: &str, featured: bool) -> Property {
        Property {
            id: PropertyId::new(),
            broker_id: BrokerId::new(),
            title: title.to_string(),
            description: String::new(),
            price: 450_000,
            property_type: "apartment".to_string(),
            transaction_kind: "sale".to_string(),
            address: "100 Main Ave".to_string(),
            neighborhood: "Downtown".to_string(),
            city: "Porto Alegre".to_string(),
            state_code: "RS".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            area_m2: 80,
            parking_spaces: 1,
            is_featured: featured,
            views_count: 0,
            main_image_url: None,
            images: Vec::new(),
            features: Vec::new(),
            property_code: None,
            slug: None,
            is_active: true,
            status: "active".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn titles(list: &[Property]) -> Vec<&str> {
        list.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_query_partitions_everything() {
        let catalog = vec![
            property("Featured villa", true),
            property("Plain house", false),
            property("Plain flat", false),
        ];
        let result = apply(&catalog, &QueryState::new());

        assert_eq!(titles(&result.featured), vec!["Featured villa"]);
        assert_eq!(titles(&result.regular), vec!["Plain house", "Plain flat"]);
    }

    #[test]
    fn partitions_are_disjoint_subsets_in_order() {
        let catalog: Vec<Property> = (0..8)
            .map(|i| property(&format!("p{i}"), i % 3 == 0))
            .collect();
        let result = apply(&catalog, &QueryState::new());

        assert_eq!(
            result.featured.len() + result.regular.len(),
            catalog.len()
        );
        for pair in [&result.featured, &result.regular] {
            let mut last_index = 0;
            for item in pair {
                let index = catalog.iter().position(|p| p.id == item.id).unwrap();
                assert!(index >= last_index, "order not preserved");
                last_index = index;
            }
        }
        assert!(result
            .featured
            .iter()
            .all(|f| result.regular.iter().all(|r| r.id != f.id)));
    }

    #[test]
    fn term_matches_title_case_insensitively() {
        let catalog = vec![
            property("Apartamento Centro", false),
            property("Casa Sul", false),
            property("Apto Praia", false),
        ];
        let mut query = QueryState::new();
        query.set_term("ap");
        let result = apply(&catalog, &query);

        assert_eq!(
            titles(&result.regular),
            vec!["Apartamento Centro", "Apto Praia"]
        );
    }

    #[test]
    fn term_matches_address_and_neighborhood_and_city_and_code() {
        let mut p = property("Nothing matches in the title", false);
        p.property_code = Some("VX-77".to_string());
        let catalog = vec![p];

        for term in ["main ave", "downtown", "porto", "vx-77"] {
            let mut query = QueryState::new();
            query.set_term(term);
            assert_eq!(apply(&catalog, &query).regular.len(), 1, "term {term:?}");
        }

        let mut query = QueryState::new();
        query.set_term("no such thing");
        assert!(apply(&catalog, &query).regular.is_empty());
    }

    #[test]
    fn term_is_sanitized_not_rejected() {
        let mut query = QueryState::new();
        query.set_term(&"x".repeat(500));
        assert_eq!(query.term().len(), MAX_TERM_LEN);

        query.set_term("  beach\u{0007}\nhouse  ");
        assert_eq!(query.term(), "beachhouse");
    }

    #[test]
    fn facets_are_conjunctive() {
        let mut cheap = property("Cheap studio", false);
        cheap.price = 90_000;
        cheap.bedrooms = 0;
        let mut rental = property("Rental flat", false);
        rental.transaction_kind = "rental".to_string();
        let catalog = vec![cheap, rental, property("Family home", false)];

        let mut query = QueryState::new();
        query.filters.min_price = Some(100_000);
        query.filters.min_bedrooms = Some(2);
        query.filters.transaction_kind = Some(TransactionKind::Sale);
        let result = apply(&catalog, &query);

        assert_eq!(titles(&result.regular), vec!["Family home"]);
    }

    #[test]
    fn unset_facets_impose_no_constraint() {
        let catalog = vec![property("Anything", false)];
        let result = apply(&catalog, &QueryState::new());
        assert_eq!(result.regular.len(), 1);
    }

    #[test]
    fn apply_is_deterministic() {
        let catalog = vec![
            property("Apartamento Centro", true),
            property("Casa Sul", false),
        ];
        let mut query = QueryState::new();
        query.set_term("a");
        query.filters.max_price = Some(1_000_000);

        assert_eq!(apply(&catalog, &query), apply(&catalog, &query));
    }

    #[test]
    fn has_active_filters_is_derived() {
        let mut query = QueryState::new();
        assert!(!query.has_active_filters());

        query.set_term("x");
        assert!(query.has_active_filters());

        query.set_term("");
        query.filters.min_bedrooms = Some(1);
        assert!(query.has_active_filters());
    }
}
