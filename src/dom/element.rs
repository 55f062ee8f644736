// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Establecer text content (nunca interpreta HTML)
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Remover hijo
pub fn remove_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.remove_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Remover atributo
pub fn remove_attribute(element: &Element, name: &str) -> Result<(), JsValue> {
    element.remove_attribute(name)
}

/// Activar/desactivar un atributo booleano (disabled, hidden...)
pub fn toggle_attribute(element: &Element, name: &str, on: bool) -> Result<(), JsValue> {
    if on {
        set_attribute(element, name, "")
    } else {
        remove_attribute(element, name)
    }
}

/// Leer el value de un <input>
pub fn input_value(element: &Element) -> Option<String> {
    element.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

/// Poner el foco en un elemento
pub fn focus(element: &Element) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .focus()
}
