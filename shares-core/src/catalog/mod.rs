//! Catalog loading: CSV files in one of the supported layouts.

pub mod error;
pub mod layout;
pub mod loader;

pub use error::CatalogError;
pub use layout::CatalogLayout;
pub use loader::{load_catalog, parse_catalog};
