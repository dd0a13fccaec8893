pub mod catalog;
pub mod errors;
pub mod fetch_state;
pub mod logging;

pub use catalog::{CatalogSource, Price, Product, ProductId, decode_products};
pub use errors::{CatalogError, CatalogResult};
pub use fetch_state::{CatalogState, FetchPhase, FetchState};
