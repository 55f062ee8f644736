// ============================================================================
// ENTRY HISTORY PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Acciones de UI sobre el estado
// - State: Store de entradas con Rc<RefCell> + subscribers
// - Models: Estructuras serializables
// ============================================================================

pub mod models;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod config;
pub mod app;

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::{AppState, StoreEvent, SubscriptionId};

pub use crate::models::Entry;
pub use crate::state::EntryListStore;

// App montada (wasm es single-thread)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Entry History - Rust Puro + MVVM ({})", CONFIG.environment);

    // El store se crea antes de montar el árbol de UI
    let state = AppState::new();
    let app = App::mount(state, &CONFIG.mount_element_id)?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Clon del estado de la app montada (libera el borrow de APP antes de mutar)
fn current_state() -> Result<AppState, JsValue> {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .map(|app| app.state().clone())
    })
    .ok_or_else(|| JsValue::from_str("App no está inicializada"))
}

/// Re-render completo de la app montada
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.try_borrow() {
        Ok(slot) => match slot.as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [RERENDER] App ocupada, re-render omitido"),
    });
}

/// Re-render (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

// ============================================================================
// STORE API para JavaScript
// ============================================================================

#[wasm_bindgen(js_name = addEntry)]
pub fn add_entry(text: &str) -> Result<(), JsValue> {
    current_state()?.entries.add_entry(text);
    Ok(())
}

/// Retorna el texto removido, o undefined si la lista estaba vacía
#[wasm_bindgen(js_name = removeLast)]
pub fn remove_last() -> Result<Option<String>, JsValue> {
    Ok(current_state()?
        .entries
        .remove_last()
        .map(|entry| entry.user_input))
}

#[wasm_bindgen(js_name = entryCount)]
pub fn entry_count() -> Result<usize, JsValue> {
    Ok(current_state()?.entries.len())
}

/// `[{"userInput": "..."}, ...]`
#[wasm_bindgen(js_name = entriesJson)]
pub fn entries_json() -> Result<String, JsValue> {
    current_state()?
        .entries
        .to_json()
        .map_err(|e| JsValue::from_str(&e))
}

/// `callback(kind, entriesJson)` después de cada mutación;
/// kind es "added" o "removed"
#[wasm_bindgen(js_name = subscribeEntries)]
pub fn subscribe_entries(callback: js_sys::Function) -> Result<u32, JsValue> {
    let state = current_state()?;
    let store = state.entries.clone();
    let id = state.entries.subscribe(move |event| {
        let kind = match event {
            StoreEvent::Added { .. } => "added",
            StoreEvent::RemovedLast { .. } => "removed",
        };
        let json = match store.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("❌ [JS-SUBSCRIBER] {}", e);
                return;
            }
        };
        if let Err(e) = callback.call2(&JsValue::NULL, &JsValue::from_str(kind), &JsValue::from_str(&json)) {
            log::error!("❌ [JS-SUBSCRIBER] Callback lanzó: {:?}", e);
        }
    });
    Ok(id.as_u32())
}

#[wasm_bindgen(js_name = unsubscribeEntries)]
pub fn unsubscribe_entries(id: u32) -> Result<bool, JsValue> {
    Ok(current_state()?
        .entries
        .unsubscribe(SubscriptionId::from_u32(id)))
}
