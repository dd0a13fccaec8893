use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

use super::errors::{CatalogError, CatalogResult};

/// Value Object - opaque product identifier.
///
/// The catalog service issues UUID strings; numbers of any size or precision
/// are kept as parsed JSON numbers so they still key the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    #[display(fmt = "{}", _0)]
    Text(String),
    #[display(fmt = "{}", _0)]
    Number(serde_json::Number),
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value.into())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId::Text(value)
    }
}

/// Value Object - price in the catalog's currency unit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

/// Renders like a JS number: shortest round-trip digits, `-0` as `0`, and
/// exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0 + 0.0;
        let magnitude = value.abs();
        if value != 0.0 && (magnitude >= 1e21 || magnitude < 1e-6) {
            let exp = format!("{:e}", value);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, power)
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Catalog record as served by `/api/catalog/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Price::from(price),
        }
    }

    /// List item text, e.g. `Sock - $5`.
    pub fn label(&self) -> String {
        format!("{} - ${}", self.name, self.price)
    }
}

/// Parse a catalog response body. Order is preserved, unknown fields such as
/// `description` are ignored.
pub fn decode_products(body: &str) -> CatalogResult<Vec<Product>> {
    serde_json::from_str::<Vec<Product>>(body).map_err(CatalogError::from)
}

/// Port to wherever the product list comes from.
///
/// `fetch_products` consumes the source: one source value is one request.
pub trait CatalogSource {
    fn fetch_products(self) -> impl Future<Output = CatalogResult<Vec<Product>>> + 'static;
}
