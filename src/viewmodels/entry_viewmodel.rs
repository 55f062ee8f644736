// ============================================================================
// ENTRY VIEWMODEL - Acciones de UI sobre el store de entradas
// ============================================================================
// Las views solo llaman a estos métodos; la notificación al DOM la hace
// el subscriber registrado por App.
// ============================================================================

use crate::models::Entry;
use crate::state::app_state::AppState;

pub struct EntryListViewModel {
    state: AppState,
}

impl EntryListViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Guardar el texto actual del input
    pub fn set_input(&self, text: String) {
        self.state.set_input_value(text);
    }

    /// Agregar el texto del input como entrada y limpiar el input.
    /// El texto vacío también es una entrada válida.
    pub fn submit(&self) -> Entry {
        let text = self.state.take_input_value();
        log::info!("➕ [VM] Submit ({} caracteres)", text.chars().count());
        self.state.entries.add_entry(text.clone());
        Entry::from(text)
    }

    pub fn remove_last(&self) -> Option<Entry> {
        let removed = self.state.entries.remove_last();
        if removed.is_none() {
            log::debug!("ℹ️ [VM] Nada que remover");
        }
        removed
    }

    /// Habilita el botón "remove last"
    pub fn can_remove(&self) -> bool {
        !self.state.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_appends_and_clears_input() {
        let state = AppState::new();
        let vm = EntryListViewModel::new(&state);

        vm.set_input("foo".to_string());
        let entry = vm.submit();

        assert_eq!(entry, Entry::new("foo"));
        assert_eq!(state.entries.entries(), vec![Entry::new("foo")]);
        assert_eq!(state.get_input_value(), "");
    }

    #[test]
    fn test_submit_with_empty_input_adds_empty_entry() {
        let state = AppState::new();
        let vm = EntryListViewModel::new(&state);

        vm.submit();
        assert_eq!(state.entries.entries(), vec![Entry::new("")]);
    }

    #[test]
    fn test_remove_last_and_can_remove() {
        let state = AppState::new();
        let vm = EntryListViewModel::new(&state);
        assert!(!vm.can_remove());
        assert_eq!(vm.remove_last(), None);

        vm.set_input("a".to_string());
        vm.submit();
        assert!(vm.can_remove());

        assert_eq!(vm.remove_last(), Some(Entry::new("a")));
        assert!(!vm.can_remove());
    }
}
