use gloo::utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::logging::LogLevel;
use crate::infrastructure::http::join_url;

pub const DEFAULT_PRODUCTS_PATH: &str = "/api/catalog/products";
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Settings the host page may pass to `start` / `mountCatalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Empty means same origin as the host document.
    pub base_url: String,
    pub products_path: String,
    pub mount_id: String,
    pub log_level: Option<LogLevel>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            log_level: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// `undefined` and `null` select the defaults.
    pub fn from_js(value: &JsValue) -> CatalogResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = value
            .into_serde()
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.products_path.trim().is_empty() {
            return Err(CatalogError::Config("products_path must not be empty".to_string()));
        }
        if self.mount_id.trim().is_empty() {
            return Err(CatalogError::Config("mount_id must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn products_url(&self) -> String {
        join_url(&self.base_url, &self.products_path)
    }
}
