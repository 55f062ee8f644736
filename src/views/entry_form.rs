// ============================================================================
// ENTRY FORM VIEW - Input + botones "Add" / "Remove last"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click, on_input_value, on_keydown};
use crate::state::app_state::AppState;
use crate::viewmodels::EntryListViewModel;

pub const ENTRY_INPUT_ID: &str = "entry-input";
pub const ADD_BUTTON_ID: &str = "entry-add";
pub const REMOVE_LAST_BUTTON_ID: &str = "entry-remove-last";

pub fn render_entry_form(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("div")?
        .class("entry-form")
        .build();

    let input = ElementBuilder::new("input")?
        .id(ENTRY_INPUT_ID)?
        .class("entry-form__input")
        .attr("type", "text")?
        .attr("autocomplete", "off")?
        .attr("value", &state.get_input_value())?
        .build();

    {
        let vm = EntryListViewModel::new(state);
        on_input_value(&input, move |value| vm.set_input(value))?;
    }
    {
        let vm = EntryListViewModel::new(state);
        let input_el = input.clone();
        on_keydown(&input, move |e| {
            // Durante composición IME, Enter confirma el texto, no envía
            if e.key() == "Enter" && !e.is_composing() {
                e.prevent_default();
                vm.submit();
                clear_input(&input_el);
            }
        })?;
    }
    append_child(&form, &input)?;

    let add_button = ElementBuilder::new("button")?
        .id(ADD_BUTTON_ID)?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("Add")
        .build();
    {
        let vm = EntryListViewModel::new(state);
        let input_el = input.clone();
        on_click(&add_button, move |_e| {
            vm.submit();
            clear_input(&input_el);
        })?;
    }
    append_child(&form, &add_button)?;

    let can_remove = EntryListViewModel::new(state).can_remove();
    let remove_button = ElementBuilder::new("button")?
        .id(REMOVE_LAST_BUTTON_ID)?
        .class("btn btn-outline-danger")
        .attr("type", "button")?
        .text("Remove last")
        .flag("disabled", !can_remove)?
        .build();
    {
        let vm = EntryListViewModel::new(state);
        on_click(&remove_button, move |_e| {
            vm.remove_last();
        })?;
    }
    append_child(&form, &remove_button)?;

    Ok(form)
}

/// El state ya quedó vacío en submit(); sincronizar el <input>
fn clear_input(input: &Element) {
    use wasm_bindgen::JsCast;
    if let Some(input) = input.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value("");
    }
}
