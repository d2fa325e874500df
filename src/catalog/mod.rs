pub mod catalog;
pub mod item;
pub mod loader;

pub use catalog::{Catalog, CatalogError};
pub use item::{AttributeValue, Attributes, CatalogItem};
pub use loader::{load_catalog_csv, read_catalog_csv, CatalogLoadError};
