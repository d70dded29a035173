//! UI Components
//!
//! Collection view and per-item forms.

mod item_form;
mod item_list;
mod show_hide_item;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use show_hide_item::ShowHideItem;
