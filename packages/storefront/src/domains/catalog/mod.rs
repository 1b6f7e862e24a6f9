pub mod models;
pub mod query;
pub mod reveal;
pub mod session;

pub use models::{Property, TransactionKind};
pub use query::{apply, FilteredCatalog, PropertyFilters, QueryState};
pub use reveal::RevealWindow;
pub use session::{fetch_storefront, CatalogSession, NavToken, SessionState};
