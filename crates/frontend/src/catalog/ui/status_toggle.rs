use leptos::prelude::*;

const OPTIONS: [(&str, Option<&str>); 3] = [
    ("All", None),
    ("Vegan", Some("vegan")),
    ("Non-vegan", Some("non_vegan")),
];

/// Three-position vegan status switch with a sliding highlight.
///
/// The highlight move and the state update happen in the same click
/// handler, so the visual never drifts from the active filter.
#[component]
pub fn StatusToggle(
    #[prop(into)] active: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    let active_index = move || match active.get().as_deref() {
        Some("vegan") => 1,
        Some("non_vegan") => 2,
        _ => 0,
    };

    view! {
        <div class="status-toggle" id="status-toggle">
            <div
                class="status-toggle-highlight"
                id="switch-highlight"
                style=move || format!("transform: translateX({}%)", active_index() * 100)
            ></div>
            {OPTIONS
                .iter()
                .map(|(label, value)| {
                    let value = value.map(str::to_string);
                    let is_active = {
                        let value = value.clone();
                        move || active.get() == value
                    };
                    view! {
                        <button
                            class="status-toggle-btn"
                            class:active=is_active
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
