use leptos::prelude::*;

/// One selector button per category plus a leading "All" button.
///
/// Exactly one button carries the active highlight at any time; "All"
/// (value `None`) is active by default and clears the category filter.
/// Rendered only after the category list loaded; a failed categories
/// request leaves the bar absent entirely.
#[component]
pub fn CategoryBar(
    categories: Vec<String>,
    #[prop(into)] active: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="category-bar" id="category-container">
            <CategoryButton label="All".to_string() value=None active=active on_select=on_select />
            {categories
                .into_iter()
                .map(|category| view! {
                    <CategoryButton
                        label=category.clone()
                        value=Some(category)
                        active=active
                        on_select=on_select
                    />
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryButton(
    label: String,
    value: Option<String>,
    #[prop(into)] active: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    let is_active = {
        let value = value.clone();
        move || active.get() == value
    };

    view! {
        <button
            class="category-btn"
            class:active=is_active
            on:click=move |_| on_select.run(value.clone())
        >
            {label}
        </button>
    }
}
