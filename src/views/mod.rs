pub mod app;
pub mod entry_form;
pub mod entry_list;

pub use app::render_app;
pub use entry_form::{render_entry_form, ENTRY_INPUT_ID, ADD_BUTTON_ID, REMOVE_LAST_BUTTON_ID};
pub use entry_list::{render_entry_list, render_entry_item, ENTRY_LIST_ID, EMPTY_PLACEHOLDER_ID};
