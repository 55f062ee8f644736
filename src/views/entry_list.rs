// ============================================================================
// ENTRY LIST VIEW - Lista de entradas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::Entry;

pub const ENTRY_LIST_ID: &str = "entry-list";
pub const EMPTY_PLACEHOLDER_ID: &str = "entry-list-empty";

/// Renderizar la lista. Siempre incluye el <ul> (aunque esté vacío)
/// para que las actualizaciones incrementales tengan dónde escribir.
pub fn render_entry_list(entries: &[Entry]) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("section")?
        .class("entry-list-container")
        .build();

    let placeholder = render_empty_placeholder(entries.is_empty())?;
    append_child(&container, &placeholder)?;

    let list = ElementBuilder::new("ul")?
        .id(ENTRY_LIST_ID)?
        .class("entry-list")
        .build();

    for (index, entry) in entries.iter().enumerate() {
        append_child(&list, &render_entry_item(index, entry)?)?;
    }
    append_child(&container, &list)?;

    Ok(container)
}

/// Un <li> por entrada; el texto va por textContent
pub fn render_entry_item(index: usize, entry: &Entry) -> Result<Element, JsValue> {
    let item = ElementBuilder::new("li")?
        .class("entry-list__item")
        .attr("data-index", &index.to_string())?
        .text(entry.text())
        .build();

    if entry.text().is_empty() {
        item.class_list().add_1("entry-list__item--empty")?;
    }

    Ok(item)
}

fn render_empty_placeholder(visible: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .id(EMPTY_PLACEHOLDER_ID)?
        .class("entry-list__empty")
        .text("No entries yet")
        .flag("hidden", !visible)?
        .build())
}
