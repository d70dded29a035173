//! Show/Hide Item Component
//!
//! List row that mounts its child form only while toggled open.

use leptos::prelude::*;

#[component]
pub fn ShowHideItem(children: ChildrenFn) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <li>
            <button type="button" on:click=move |_| set_open.update(|v| *v = !*v)>
                {move || if open.get() { "Hide" } else { "Show" }}
            </button>
            <Show when=move || open.get()>
                {children()}
            </Show>
        </li>
    }
}
