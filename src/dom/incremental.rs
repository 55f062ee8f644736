// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo toca los nodos que cambiaron. Si falta algún nodo esperado se retorna
// Err("needs full render") y App programa un re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, get_element_by_id, remove_child, toggle_attribute};
use crate::models::Entry;
use crate::state::app_state::AppState;
use crate::views::{render_entry_item, EMPTY_PLACEHOLDER_ID, ENTRY_LIST_ID, REMOVE_LAST_BUTTON_ID};

fn needs_full_render(what: &str) -> JsValue {
    JsValue::from_str(&format!("needs full render: #{} not found", what))
}

/// Agregar un <li> al final de la lista
pub fn append_entry_item(index: usize, entry: &Entry) -> Result<(), JsValue> {
    let list = get_element_by_id(ENTRY_LIST_ID).ok_or_else(|| needs_full_render(ENTRY_LIST_ID))?;

    // El DOM debe tener exactamente `index` items antes de agregar
    if list.child_element_count() as usize != index {
        return Err(JsValue::from_str("needs full render: list out of sync"));
    }

    append_child(&list, &render_entry_item(index, entry)?)
}

/// Remover el último <li>
pub fn remove_last_entry_item(index: usize) -> Result<(), JsValue> {
    let list = get_element_by_id(ENTRY_LIST_ID).ok_or_else(|| needs_full_render(ENTRY_LIST_ID))?;

    if list.child_element_count() as usize != index + 1 {
        return Err(JsValue::from_str("needs full render: list out of sync"));
    }

    match list.last_element_child() {
        Some(last) => remove_child(&list, &last),
        None => Err(JsValue::from_str("needs full render: list already empty")),
    }
}

/// Botón "remove last" y placeholder de lista vacía
pub fn update_controls(state: &AppState) -> Result<(), JsValue> {
    let is_empty = state.entries.is_empty();

    let button = get_element_by_id(REMOVE_LAST_BUTTON_ID)
        .ok_or_else(|| needs_full_render(REMOVE_LAST_BUTTON_ID))?;
    toggle_attribute(&button, "disabled", is_empty)?;

    let placeholder = get_element_by_id(EMPTY_PLACEHOLDER_ID)
        .ok_or_else(|| needs_full_render(EMPTY_PLACEHOLDER_ID))?;
    toggle_attribute(&placeholder, "hidden", !is_empty)?;

    Ok(())
}
