use contracts::catalog::{CatalogQuery, ProductPage};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;

use crate::shared::api_utils::api_base;

/// Abort a hung products request after this long; otherwise the in-flight
/// guard would stay latched and block every later fetch.
const FETCH_TIMEOUT_MS: u32 = 15_000;

/// Fetch one page of products, with all filters applied server-side.
pub async fn fetch_products(query: &CatalogQuery) -> Result<ProductPage, String> {
    let url = format!("{}?{}", api_base(), query.to_query_string());

    let controller = web_sys::AbortController::new()
        .map_err(|_| "Failed to create abort controller".to_string())?;
    let signal = controller.signal();
    // Cancelled on drop when the request settles first.
    let _timeout = Timeout::new(FETCH_TIMEOUT_MS, move || controller.abort());

    let response = Request::get(&url)
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<ProductPage>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the distinct category list.
pub async fn fetch_categories() -> Result<Vec<String>, String> {
    let url = format!("{}categories/", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<String>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
