// ============================================================================
// EVENT HANDLING - Helpers para registrar listeners
// ============================================================================
// Los listeners en elementos del DOM se liberan cuando el elemento se destruye
// (set_inner_html("") en cada re-render), así que closure.forget() es seguro.
// Listeners globales (window/document) deben registrarse UNA sola vez.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

/// Listener genérico
pub fn on_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para "input": entrega el value actual del <input>
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let target = element.clone();
    on_event(element, "input", move |_e: Event| {
        if let Some(value) = crate::dom::input_value(&target) {
            handler(value);
        }
    })
}

/// Helper para keydown
pub fn on_keydown<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
