//! Item Form Component
//!
//! Quantity form for one item. Local edits live in an ItemBinding and are
//! reported to the provider on every keystroke.

use leptos::prelude::*;

use form_sync::{ItemId, QTY};

use crate::context::use_item_context;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ItemForm(id: ItemId, title: String) -> impl IntoView {
    let ctx = use_item_context();
    let store = use_page_store();
    web_sys::console::log_1(&format!("[ITEM {}] Render", id).into());

    // Initial values come from the provider's store at mount time
    let binding = match ctx.mount(id) {
        Ok(binding) => binding,
        Err(err) => {
            web_sys::console::log_1(&format!("[ITEM {}] {}", id, err).into());
            return view! { <p class="item-error">{err.to_string()}</p> }.into_any();
        }
    };
    let (qty, set_qty) = signal(binding.value(QTY));
    let binding = StoredValue::new(binding);

    // Drop local edits when the provider publishes a new reset key
    Effect::new(move |_| {
        let key = store.reset_key().get();
        let reverted = binding
            .try_update_value(|b| b.observe(key).then(|| b.value(QTY)))
            .flatten();
        if let Some(value) = reverted {
            web_sys::console::log_1(&format!("[ITEM {}] Reset to {:?}", id, value).into());
            set_qty.set(value);
        }
    });

    let on_add = move |_: web_sys::MouseEvent| {
        match binding.try_update_value(|b| b.commit()) {
            Some(Ok(submitted)) => {
                web_sys::console::log_1(&format!("[ITEM {}] Handle Single Add {:?}", id, submitted).into());
                set_qty.set(binding.with_value(|b| b.value(QTY)));
            }
            Some(Err(err)) => {
                web_sys::console::log_1(&format!("[ITEM {}] Add failed: {}", id, err).into());
            }
            None => {}
        }
    };

    view! {
        <form class="item-form">
            <h4>{title}</h4>
            <input
                type="number"
                prop:value=move || qty.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_qty.set(value.clone());
                    if let Some(Err(err)) = binding.try_update_value(|b| b.edit(QTY, value)) {
                        web_sys::console::log_1(&format!("[ITEM {}] {}", id, err).into());
                    }
                }
            />
            <button type="button" on:click=on_add>"Add"</button>
        </form>
    }
    .into_any()
}
