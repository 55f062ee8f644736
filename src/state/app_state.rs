// ============================================================================
// APP STATE - Estado de la sesión de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::EntryListStore;

/// Estado de la aplicación (uno por sesión, se pasa por clone)
#[derive(Clone)]
pub struct AppState {
    pub entries: EntryListStore,
    /// Texto actual del input
    pub input_value: Rc<RefCell<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            entries: EntryListStore::new(),
            input_value: Rc::new(RefCell::new(String::new())),
        }
    }

    pub fn get_input_value(&self) -> String {
        self.input_value.borrow().clone()
    }

    pub fn set_input_value(&self, value: String) {
        *self.input_value.borrow_mut() = value;
    }

    /// Tomar el texto del input dejándolo vacío
    pub fn take_input_value(&self) -> String {
        std::mem::take(&mut *self.input_value.borrow_mut())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
