use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::app::CatalogView;
use crate::config::CatalogConfig;
use crate::domain::{
    catalog::CatalogSource,
    errors::{CatalogError, CatalogResult},
    logging::{self, LogComponent},
};
use crate::infrastructure::http::GlooCatalogClient;
use crate::lifecycle::MountTask;
use crate::log_info;

/// Handle to a mounted catalog view. Dropping it leaves the view mounted.
#[wasm_bindgen]
pub struct CatalogMount {
    task: Rc<MountTask>,
    container: HtmlElement,
}

#[wasm_bindgen]
impl CatalogMount {
    /// Cancel any in-flight request and clear the container.
    pub fn unmount(self) {
        self.task.cancel();
        self.container.set_inner_html("");
        log_info!(LogComponent::Presentation("CatalogMount"), "🧹 Catalog unmounted");
    }

    /// True once the catalog request has been cancelled.
    #[wasm_bindgen(getter, js_name = isCancelled)]
    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }
}

/// Mount the catalog view into `container`, fetching through `source`.
pub fn mount_catalog<S>(container: HtmlElement, source: S) -> CatalogMount
where
    S: CatalogSource + 'static,
{
    let task = Rc::new(MountTask::new());
    let view_task = Rc::clone(&task);
    mount_to(container.clone(), move || view! { <CatalogView source=source task=view_task /> });
    CatalogMount { task, container }
}

/// Mount with the HTTP client and log level from `config`.
pub fn mount_with_config(container: HtmlElement, config: &CatalogConfig) -> CatalogMount {
    if let Some(level) = config.log_level {
        logging::set_min_level(level);
    }
    log_info!(
        LogComponent::Presentation("CatalogMount"),
        "🚀 Mounting catalog ({})",
        config.products_url()
    );
    mount_catalog(container, GlooCatalogClient::from_config(config))
}

/// Look up the attachment point in the host document.
pub fn find_mount_point(id: &str) -> CatalogResult<HtmlElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| CatalogError::Browser("document not available".to_string()))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| CatalogError::Browser(format!("no element with id '{}'", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CatalogError::Browser(format!("element '{}' is not an HTML element", id)))
}

fn to_js(err: CatalogError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mount into an element supplied by the host page.
#[wasm_bindgen(js_name = mountCatalog)]
pub fn mount_catalog_js(container: HtmlElement, config: JsValue) -> Result<CatalogMount, JsValue> {
    let config = CatalogConfig::from_js(&config).map_err(to_js)?;
    Ok(mount_with_config(container, &config))
}

/// Mount into the element named by `config.mount_id` (`root` by default).
#[wasm_bindgen(js_name = startCatalog)]
pub fn start(config: JsValue) -> Result<CatalogMount, JsValue> {
    let config = CatalogConfig::from_js(&config).map_err(to_js)?;
    let container = find_mount_point(&config.mount_id).map_err(to_js)?;
    Ok(mount_with_config(container, &config))
}
