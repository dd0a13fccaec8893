#![cfg(target_arch = "wasm32")]

use futures::channel::oneshot;
use gloo_timers::future::sleep;
use sockshop_catalog::domain::{CatalogError, CatalogResult, CatalogSource, Product};
use sockshop_catalog::infrastructure::GlooCatalogClient;
use sockshop_catalog::presentation::{find_mount_point, mount_catalog};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

type Reply = oneshot::Sender<CatalogResult<Vec<Product>>>;

/// Source whose response is released by the test.
struct StubSource {
    calls: Rc<Cell<usize>>,
    response: oneshot::Receiver<CatalogResult<Vec<Product>>>,
}

impl CatalogSource for StubSource {
    fn fetch_products(self) -> impl Future<Output = CatalogResult<Vec<Product>>> + 'static {
        self.calls.set(self.calls.get() + 1);
        let response = self.response;
        async move {
            response
                .await
                .unwrap_or_else(|_| Err(CatalogError::Network("stub dropped".to_string())))
        }
    }
}

fn stub() -> (StubSource, Reply, Rc<Cell<usize>>) {
    let (tx, rx) = oneshot::channel();
    let calls = Rc::new(Cell::new(0));
    let source = StubSource { calls: Rc::clone(&calls), response: rx };
    (source, tx, calls)
}

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn texts(root: &HtmlElement, selector: &str) -> Vec<String> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

fn data_url(mime: &str, body: &str) -> String {
    format!("data:{},{}", mime, String::from(js_sys::encode_uri_component(body)))
}

async fn tick() {
    sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn pending_fetch_shows_heading_and_empty_list() {
    let root = container();
    let (source, _reply, calls) = stub();
    let _mount = mount_catalog(root.clone(), source);
    tick().await;

    assert_eq!(texts(&root, "h1"), vec!["SockShop Catalog".to_string()]);
    assert!(texts(&root, "li").is_empty());
    assert!(texts(&root, ".catalog-error").is_empty());
    assert_eq!(texts(&root, "ul"), vec![String::new()]);
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
async fn products_render_in_response_order() {
    let root = container();
    let (source, reply, _) = stub();
    let _mount = mount_catalog(root.clone(), source);

    reply
        .send(Ok(vec![
            Product::new(1, "Sock", 5.0),
            Product::new(7, "Shoe", 12.5),
            Product::new("sku-3", "Hat", 3.0),
        ]))
        .unwrap();
    tick().await;

    assert_eq!(texts(&root, "li"), vec!["Sock - $5", "Shoe - $12.5", "Hat - $3"]);
    assert!(texts(&root, ".catalog-error").is_empty());
}

#[wasm_bindgen_test]
async fn empty_catalog_renders_heading_over_empty_list() {
    let root = container();
    let (source, reply, _) = stub();
    let _mount = mount_catalog(root.clone(), source);

    reply.send(Ok(Vec::new())).unwrap();
    tick().await;

    assert_eq!(texts(&root, "h1"), vec!["SockShop Catalog".to_string()]);
    assert!(texts(&root, "li").is_empty());
}

#[wasm_bindgen_test]
async fn failed_fetch_shows_alert_and_no_items() {
    let root = container();
    let (source, reply, _) = stub();
    let _mount = mount_catalog(root.clone(), source);

    reply
        .send(Err(CatalogError::Status { status: 500, status_text: "Internal Server Error".into() }))
        .unwrap();
    tick().await;

    assert!(texts(&root, "li").is_empty());
    let alerts = texts(&root, "[role=alert]");
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("500 Internal Server Error"));
}

#[wasm_bindgen_test]
async fn one_request_per_mount() {
    let root = container();
    let (source, reply, calls) = stub();
    let _mount = mount_catalog(root.clone(), source);

    reply.send(Ok(vec![Product::new(1, "Sock", 5.0)])).unwrap();
    tick().await;
    tick().await;

    assert_eq!(calls.get(), 1);
    assert_eq!(texts(&root, "li").len(), 1);
}

#[wasm_bindgen_test]
async fn unmount_before_response_drops_it() {
    let root = container();
    let (source, reply, _) = stub();
    let mount = mount_catalog(root.clone(), source);

    mount.unmount();
    tick().await;

    // The aborted task has released its receiver.
    assert!(reply.send(Ok(vec![Product::new(1, "Sock", 5.0)])).is_err());
    tick().await;
    assert!(texts(&root, "li").is_empty());
    assert_eq!(root.inner_html(), "");
}

#[wasm_bindgen_test]
async fn mounts_into_root_element_by_id() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_id("root");
    document.body().unwrap().append_child(&host).unwrap();

    let root = find_mount_point("root").unwrap();
    let (source, reply, _) = stub();
    let mount = mount_catalog(root.clone(), source);
    reply.send(Ok(vec![Product::new(1, "Sock", 5.0)])).unwrap();
    tick().await;

    assert_eq!(texts(&root, "li"), vec!["Sock - $5"]);
    mount.unmount();
    host.remove();
}

#[wasm_bindgen_test]
fn missing_mount_point_is_a_browser_error() {
    let err = find_mount_point("no-such-catalog-root").unwrap_err();
    assert_eq!(err, CatalogError::Browser("no element with id 'no-such-catalog-root'".to_string()));
}

#[wasm_bindgen_test]
async fn http_client_decodes_json_response() {
    let url = data_url("application/json", r#"[{"id":1,"name":"Sock","price":5}]"#);
    let products = GlooCatalogClient::new(url).fetch_products().await.unwrap();
    assert_eq!(products, vec![Product::new(1, "Sock", 5.0)]);
}

#[wasm_bindgen_test]
async fn http_client_reports_malformed_body() {
    let url = data_url("text/plain", "not-json");
    let err = GlooCatalogClient::new(url).fetch_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "unexpected error: {err:?}");
}

#[wasm_bindgen_test]
async fn http_client_reports_refused_connection() {
    let client = GlooCatalogClient::new("http://127.0.0.1:9/api/catalog/products");
    let err = client.fetch_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)), "unexpected error: {err:?}");
}
