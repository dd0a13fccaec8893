use leptos::*;
use std::rc::Rc;

use crate::{
    application::load_catalog,
    domain::{
        catalog::{CatalogSource, Product},
        fetch_state::CatalogState,
        logging::LogComponent,
    },
    lifecycle::MountTask,
    log_debug,
};

pub const CATALOG_TITLE: &str = "SockShop Catalog";

/// 🧦 Heading plus the product list, filled by a single fetch per mount.
///
/// While the fetch is pending the list is empty with no placeholder. A failed
/// fetch keeps the list empty and adds an alert below it.
#[component]
pub fn CatalogView<S>(
    source: S,
    /// Externally owned task, so the mount handle can cancel the request.
    #[prop(optional)]
    task: Option<Rc<MountTask>>,
) -> impl IntoView
where
    S: CatalogSource + 'static,
{
    let state = create_rw_signal(CatalogState::default());
    let task = task.unwrap_or_default();

    // Component bodies run once per mount; reactive updates never re-enter here.
    let request = load_catalog(source);
    task.spawn(async move {
        let result = request.await;
        state.update(|current| {
            if current.settle(result) {
                log_debug!(
                    LogComponent::Presentation("CatalogView"),
                    "catalog state -> {}",
                    current.phase()
                );
            }
        });
    });

    {
        let task = Rc::clone(&task);
        on_cleanup(move || task.cancel());
    }

    let products = move || state.with(|current| current.products().to_vec());
    let error = move || state.with(|current| current.error().cloned());

    view! {
        <div class="sockshop-catalog">
            <h1>{CATALOG_TITLE}</h1>
            <ul>
                <For
                    each=products
                    key=|product| product.id.clone()
                    children=move |product: Product| view! { <li>{product.label()}</li> }
                />
            </ul>
            {move || error().map(|err| view! {
                <p class="catalog-error" role="alert">
                    {format!("Could not load the catalog: {}", err)}
                </p>
            })}
        </div>
    }
}
