// ============================================================================
// APP - Montaje de la aplicación sobre el elemento host
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{append_child, focus, get_element_by_id, set_inner_html};
use crate::dom::incremental::{append_entry_item, remove_last_entry_item, update_controls};
use crate::state::app_state::AppState;
use crate::state::{StoreEvent, SubscriptionId};
use crate::views::{render_app, ENTRY_INPUT_ID};

/// Aplicación montada
pub struct App {
    state: AppState,
    root: Element,
    subscription: SubscriptionId,
}

impl App {
    /// Montar sobre `#element_id`. El state (y su store) ya debe existir.
    pub fn mount(state: AppState, element_id: &str) -> Result<Self, JsValue> {
        let root = get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", element_id)))?;

        // Suscribirse al store para parchear el DOM en cada mutación
        let subscription = {
            let state_clone = state.clone();
            state
                .entries
                .subscribe(move |event| apply_store_event(&state_clone, event))
        };

        log::info!("🔌 [APP] Montada en #{}", element_id);

        Ok(Self {
            state,
            root,
            subscription,
        })
    }

    /// Re-render completo
    pub fn render(&self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render() ({} entradas)", self.state.entries.len());

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;

        if let Some(input) = get_element_by_id(ENTRY_INPUT_ID) {
            if let Err(e) = focus(&input) {
                log::warn!("⚠️ [APP] No se pudo enfocar el input: {:?}", e);
            }
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.state.entries.unsubscribe(self.subscription);
        set_inner_html(&self.root, "");
        log::info!("👋 [APP] Desmontada");
    }
}

/// Aplicar un evento del store al DOM; si falla, re-render completo en el próximo tick
fn apply_store_event(state: &AppState, event: &StoreEvent) {
    let result = match event {
        StoreEvent::Added { index, entry } => append_entry_item(*index, entry),
        StoreEvent::RemovedLast { index, .. } => remove_last_entry_item(*index),
    }
    .and_then(|_| update_controls(state));

    if let Err(e) = result {
        log::warn!("🔄 [APP] Actualización incremental falló ({:?}), re-render completo", e);
        Timeout::new(0, crate::rerender_app).forget();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::{document, get_element_by_id};
    use crate::views::{ADD_BUTTON_ID, ENTRY_INPUT_ID, ENTRY_LIST_ID, REMOVE_LAST_BUTTON_ID, EMPTY_PLACEHOLDER_ID};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

    fn create_host(id: &str) -> Element {
        let doc = document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_id(id);
        doc.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn list_texts() -> Vec<String> {
        let list = get_element_by_id(ENTRY_LIST_ID).unwrap();
        let mut texts = Vec::new();
        let mut child = list.first_element_child();
        while let Some(item) = child {
            texts.push(item.text_content().unwrap_or_default());
            child = item.next_element_sibling();
        }
        texts
    }

    #[wasm_bindgen_test]
    fn mount_fails_without_host_element() {
        let result = App::mount(AppState::new(), "does-not-exist");
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn store_mutations_patch_the_dom() {
        let host = create_host("test-host");
        let state = AppState::new();
        let app = App::mount(state.clone(), "test-host").unwrap();
        app.render().unwrap();

        let button = get_element_by_id(REMOVE_LAST_BUTTON_ID).unwrap();
        let placeholder = get_element_by_id(EMPTY_PLACEHOLDER_ID).unwrap();
        assert!(button.has_attribute("disabled"));
        assert!(!placeholder.has_attribute("hidden"));

        state.entries.add_entry("foo");
        state.entries.add_entry("<b>bar</b>");
        assert_eq!(list_texts(), vec!["foo", "<b>bar</b>"]);
        assert!(!button.has_attribute("disabled"));
        assert!(placeholder.has_attribute("hidden"));

        state.entries.remove_last();
        assert_eq!(list_texts(), vec!["foo"]);

        state.entries.add_entry("");
        assert_eq!(list_texts(), vec!["foo", ""]);
        let list = get_element_by_id(ENTRY_LIST_ID).unwrap();
        let empty_item = list.last_element_child().unwrap();
        assert!(empty_item.class_list().contains("entry-list__item--empty"));
        assert_eq!(empty_item.text_content().unwrap_or_default(), "");

        state.entries.remove_last();
        state.entries.remove_last();
        state.entries.remove_last();
        assert!(list_texts().is_empty());
        assert!(button.has_attribute("disabled"));

        drop(app);
        host.remove();
    }

    fn input_element() -> HtmlInputElement {
        get_element_by_id(ENTRY_INPUT_ID)
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
    }

    fn type_text(text: &str) {
        let input = input_element();
        input.set_value(text);
        input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    }

    fn press_enter(composing: bool) {
        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        init.set_is_composing(composing);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        input_element().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn form_submits_and_clears_input() {
        let host = create_host("test-host-form");
        let state = AppState::new();
        let app = App::mount(state.clone(), "test-host-form").unwrap();
        app.render().unwrap();

        type_text("hola");
        assert_eq!(state.get_input_value(), "hola");

        get_element_by_id(ADD_BUTTON_ID)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
        assert_eq!(list_texts(), vec!["hola"]);
        assert_eq!(input_element().value(), "");
        assert_eq!(state.get_input_value(), "");

        // Enter durante composición IME no envía
        type_text("漢");
        press_enter(true);
        assert_eq!(list_texts(), vec!["hola"]);
        assert_eq!(input_element().value(), "漢");

        press_enter(false);
        assert_eq!(list_texts(), vec!["hola", "漢"]);
        assert_eq!(input_element().value(), "");

        drop(app);
        host.remove();
    }
}
