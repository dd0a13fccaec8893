pub mod wasm_api;

pub use wasm_api::{CatalogMount, find_mount_point, mount_catalog, mount_with_config};
