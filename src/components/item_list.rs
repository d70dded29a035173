//! Item List Component
//!
//! One show/hide row per loaded item, plus the two state buttons.

use leptos::prelude::*;

use crate::components::{ItemForm, ShowHideItem};
use crate::context::use_item_context;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_item_context();
    let store = use_page_store();

    view! {
        <button on:click=move |_| ctx.show_ref()>"Show Ref State"</button>
        <button on:click=move |_| ctx.show_and_reset()>"Show Ref and Reset"</button>
        <ul class="item-list">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let title = item.title;
                    view! {
                        <ShowHideItem>
                            <ItemForm id=id title=title.clone() />
                        </ShowHideItem>
                    }
                }
            />
        </ul>
    }
}
