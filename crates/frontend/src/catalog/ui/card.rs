use contracts::catalog::Product;
use leptos::prelude::*;

/// Image shown when a product has no `image_url`.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+Image";

/// Image swapped in when the product image fails to load at display time.
pub const IMAGE_ERROR_URL: &str = "https://placehold.co/600x400?text=Image+Error";

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let status = product.status();
    let (image_failed, set_image_failed) = signal(false);

    let image_url = product
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
    let src = move || {
        if image_failed.get() {
            IMAGE_ERROR_URL.to_string()
        } else {
            image_url.clone()
        }
    };

    let price = product.price.map(|p| format!("₹{:.2}", p));

    view! {
        <div class="product-card">
            <div class="product-image">
                <img
                    src=src
                    alt=product.display_name()
                    on:error=move |_| set_image_failed.set(true)
                />
                <span class=format!("badge {}", status.css_class())>{status.label()}</span>
            </div>
            <div class="product-body">
                <h3 class="product-name">{product.display_name()}</h3>
                <p class="product-description">{product.display_description()}</p>
                <p class="product-category">
                    "Category: " <strong>{product.display_category()}</strong>
                </p>
                {price.map(|p| view! { <p class="product-price">{p}</p> })}
                <a class="product-link" href=product.link() target="_blank">
                    "View Product"
                </a>
            </div>
        </div>
    }
}
