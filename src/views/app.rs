// ============================================================================
// APP VIEW - Vista raíz (header + formulario + lista)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{ElementBuilder, append_child};
use crate::state::app_state::AppState;
use crate::views::{render_entry_form, render_entry_list};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("app-container container py-3")
        .build();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(
            ElementBuilder::new("h1")?
                .class("h3")
                .text(&CONFIG.app_title)
                .build(),
        )?
        .build();
    append_child(&container, &header)?;

    append_child(&container, &render_entry_form(state)?)?;

    let list = state.entries.with_entries(render_entry_list)?;
    append_child(&container, &list)?;

    Ok(container)
}
