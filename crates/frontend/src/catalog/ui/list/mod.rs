pub mod state;

use contracts::catalog::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::{fetch_categories, fetch_products};
use crate::catalog::ui::card::ProductCard;
use crate::catalog::ui::category_bar::CategoryBar;
use crate::catalog::ui::status_toggle::StatusToggle;
use crate::catalog::ui::vendor_banner::VendorBanner;
use crate::shared::api_utils::vendor_from_query;

/// The catalog page: category bar, status switch, product grid and
/// load-more pagination, all driven by one [`state::CatalogState`].
#[component]
pub fn CatalogList() -> impl IntoView {
    let state = state::create_state(vendor_from_query());

    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(None::<Vec<String>>);
    let (loading, set_loading) = signal(false);
    let (loading_more, set_loading_more) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (empty, set_empty) = signal(false);
    let (has_next, set_has_next) = signal(false);

    let load_products = move || {
        // In-flight guard: a second trigger is a no-op.
        let Some(token) = state.try_update(|s| s.begin_fetch()).flatten() else {
            return;
        };

        let query = state.with_untracked(|s| s.query());
        if query.page == 1 {
            set_loading.set(true);
            set_has_next.set(false);
        } else {
            set_loading_more.set(true);
        }
        set_error.set(None);

        spawn_local(async move {
            let result = fetch_products(&query).await;

            // A stale token means a filter changed while this request was
            // in flight; its payload must not touch the page.
            if !state.try_update(|s| s.finish_fetch(token)).unwrap_or(false) {
                return;
            }

            set_loading.set(false);
            set_loading_more.set(false);

            match result {
                Ok(page) => {
                    if query.page == 1 && page.results.is_empty() {
                        set_products.set(Vec::new());
                        set_empty.set(true);
                        set_has_next.set(false);
                        return;
                    }
                    set_empty.set(false);
                    // Append-only across load-more calls.
                    set_products.update(|items| items.extend(page.results));
                    set_has_next.set(page.has_next);
                }
                Err(e) => {
                    log::error!("Product fetch failed: {}", e);
                    set_error.set(Some("Error loading products.".to_string()));
                }
            }
        });
    };

    let load_categories = move || {
        spawn_local(async move {
            match fetch_categories().await {
                Ok(list) => set_categories.set(Some(list)),
                // Degrades to no category bar; never blocks products.
                Err(e) => log::error!("Category fetch failed: {}", e),
            }
        });
    };

    let on_select_category = Callback::new(move |category: Option<String>| {
        state.update(|s| s.select_category(category));
        set_products.set(Vec::new());
        set_empty.set(false);
        load_products();
    });

    let on_select_status = Callback::new(move |status: Option<String>| {
        state.update(|s| s.select_status(status));
        set_products.set(Vec::new());
        set_empty.set(false);
        load_products();
    });

    let on_load_more = move |_| {
        if state.with_untracked(|s| s.is_fetching) {
            return;
        }
        state.update(|s| s.next_page());
        load_products();
    };

    let vendor = Signal::derive(move || state.with(|s| s.vendor.clone()));
    let active_category = Signal::derive(move || state.with(|s| s.category.clone()));
    let active_status = Signal::derive(move || state.with(|s| s.status.clone()));

    load_categories();
    load_products();

    view! {
        <div class="catalog">
            <VendorBanner vendor=vendor />

            {move || {
                categories.get().map(|list| view! {
                    <CategoryBar
                        categories=list
                        active=active_category
                        on_select=on_select_category
                    />
                })
            }}

            <StatusToggle active=active_status on_select=on_select_status />

            {move || {
                error.get().map(|message| view! {
                    <p class="error-message" id="error-message">{message}</p>
                })
            }}

            <Show when=move || loading.get()>
                <p class="loading-message" id="loading-message">"Loading products..."</p>
            </Show>

            <Show when=move || empty.get()>
                <p class="empty-message" id="empty-message">"No products found."</p>
            </Show>

            <div class="product-grid" id="product-container">
                {move || {
                    products
                        .get()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                }}
            </div>

            <Show when=move || has_next.get()>
                <div class="load-more" id="load-more-container">
                    <button class="load-more-btn" id="load-more-btn" on:click=on_load_more>
                        {move || if loading_more.get() { "Loading..." } else { "Load More" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
