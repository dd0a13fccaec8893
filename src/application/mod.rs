use std::future::Future;

use crate::domain::{
    catalog::{CatalogSource, Product},
    errors::CatalogResult,
    logging::LogComponent,
};
use crate::{log_error, log_info};

/// Run one catalog fetch through `source`, logging the outcome.
pub fn load_catalog<S>(source: S) -> impl Future<Output = CatalogResult<Vec<Product>>> + 'static
where
    S: CatalogSource + 'static,
{
    let request = source.fetch_products();
    async move {
        log_info!(LogComponent::Application("Catalog"), "📡 Loading catalog");
        let result = request.await;
        match &result {
            Ok(products) => {
                log_info!(
                    LogComponent::Application("Catalog"),
                    "✅ Loaded {} products",
                    products.len()
                );
            }
            Err(err) => {
                log_error!(LogComponent::Application("Catalog"), "❌ Catalog unavailable: {}", err);
            }
        }
        result
    }
}
