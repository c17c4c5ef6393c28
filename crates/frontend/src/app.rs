use crate::catalog::ui::list::CatalogList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="catalog-shell">
            <header class="catalog-header">
                <h1>"Vegan Product Catalog"</h1>
            </header>
            <CatalogList />
        </main>
    }
}
