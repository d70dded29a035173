//! Course Forms App
//!
//! Provider component owning the coordinator, plus top-level composition.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use form_sync::{ItemCoordinator, LoadState, SyncConfig};

use crate::components::ItemList;
use crate::context::ItemContext;
use crate::store::{PageState, PageStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Provider>
            <h1>"Mutable State Provider & Children"</h1>
            <ItemList />
        </Provider>
    }
}

/// Owns the coordinator for its lifetime and renders children once items
/// are loaded
#[component]
pub fn Provider(children: ChildrenFn) -> impl IntoView {
    web_sys::console::log_1(&"[PROVIDER] Render".into());

    let store = Store::new(PageState::default());
    provide_context(store);

    // The console dump happens in ItemContext::show_and_reset
    let coordinator = ItemCoordinator::with_fixture(SyncConfig {
        dump_before_reset: false,
        ..SyncConfig::default()
    });
    let closer = coordinator.clone();
    let ctx = ItemContext::new(coordinator, store);
    provide_context(ctx);

    // Load items once on mount
    spawn_local(async move {
        ctx.load().await;
    });

    // Anything still loading is dropped when the provider goes away
    on_cleanup(move || closer.close());

    let status = move || match store.load_state().get() {
        LoadState::Failed(err) => format!("Failed to load items: {}", err),
        _ => "Loading...".to_string(),
    };

    view! {
        <Show
            when=move || store.load_state().get().is_ready()
            fallback=move || view! { <p class="loading">{status}</p> }
        >
            {children()}
        </Show>
    }
}
