use gloo::net::http::Request;
use std::future::Future;

use crate::config::CatalogConfig;
use crate::domain::{
    catalog::{CatalogSource, Product, decode_products},
    errors::{CatalogError, CatalogResult},
    logging::LogComponent,
};
use crate::log_debug;

/// Catalog client on top of gloo's fetch wrapper
#[derive(Debug, Clone)]
pub struct GlooCatalogClient {
    url: String,
    default_headers: Vec<(String, String)>,
}

impl GlooCatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.products_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for GlooCatalogClient {
    fn fetch_products(self) -> impl Future<Output = CatalogResult<Vec<Product>>> + 'static {
        let Self { url, default_headers } = self;
        async move {
            log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

            let mut request = Request::get(&url);
            for (key, value) in &default_headers {
                request = request.header(key, value);
            }

            let response = request
                .send()
                .await
                .map_err(|e| CatalogError::Network(e.to_string()))?;

            if let Some(err) = status_error(response.status(), response.status_text()) {
                log_debug!(LogComponent::Infrastructure("HTTP"), "❌ {} ({})", err, url);
                return Err(err);
            }

            let body = response
                .text()
                .await
                .map_err(|e| CatalogError::Network(format!("failed to read body: {}", e)))?;

            log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET response: {} bytes", body.len());

            decode_products(&body)
        }
    }
}

/// Map a non-2xx response to `CatalogError::Status`.
pub fn status_error(status: u16, status_text: String) -> Option<CatalogError> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(CatalogError::Status { status, status_text })
    }
}

/// Join a base URL and an endpoint path. Absolute endpoints are returned as is;
/// an empty base keeps the path origin-relative.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}
