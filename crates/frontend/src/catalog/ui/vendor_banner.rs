use leptos::prelude::*;

/// Banner shown only when a vendor filter came in through the page URL.
#[component]
pub fn VendorBanner(#[prop(into)] vendor: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            vendor.get().map(|v| view! {
                <div class="vendor-banner" id="vendor-filter-message">
                    "Showing products from " <b>{v}</b>
                </div>
            })
        }}
    }
}
