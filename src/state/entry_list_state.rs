// ============================================================================
// ENTRY LIST STATE - Store de entradas (lista ordenada, append / pop)
// ============================================================================
// Una sola instancia por sesión, creada en AppState y compartida por clone.
// Los clones comparten lista y subscribers.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Entry;
use crate::state::reactivity::{SubscriptionId, Subscribers};

/// Evento emitido después de cada mutación exitosa
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// Entrada agregada al final, en la posición `index`
    Added { index: usize, entry: Entry },
    /// Entrada removida del final; `index` es la posición que ocupaba
    RemovedLast { index: usize, entry: Entry },
}

/// Estado observable del store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    NonEmpty,
}

/// Store de entradas
#[derive(Clone)]
pub struct EntryListStore {
    entries: Rc<RefCell<Vec<Entry>>>,
    subscribers: Subscribers<StoreEvent>,
}

impl EntryListStore {
    /// Crear store vacío
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
            subscribers: Subscribers::new(),
        }
    }

    /// Agregar una entrada al final. Nunca falla.
    pub fn add_entry(&self, text: impl Into<String>) {
        let entry = Entry::new(text);
        let index = {
            let mut entries = self.entries.borrow_mut();
            entries.push(entry.clone());
            entries.len() - 1
        };

        log::info!("📝 [STORE] Entrada agregada en posición {}", index);
        self.log_snapshot("Store actualizado");

        self.subscribers.notify(StoreEvent::Added { index, entry });
    }

    /// Remover la última entrada.
    /// Con la lista vacía no hace nada y retorna None (sin notificar).
    pub fn remove_last(&self) -> Option<Entry> {
        self.log_snapshot("Antes de remover");
        let removed = {
            let mut entries = self.entries.borrow_mut();
            entries.pop().map(|entry| (entries.len(), entry))
        };

        match removed {
            Some((index, entry)) => {
                log::info!("🗑️ [STORE] Última entrada removida (posición {})", index);
                self.log_snapshot("Store actualizado");
                self.subscribers.notify(StoreEvent::RemovedLast {
                    index,
                    entry: entry.clone(),
                });
                Some(entry)
            }
            None => {
                log::debug!("ℹ️ [STORE] remove_last con lista vacía, nada que remover");
                None
            }
        }
    }

    /// Copia de la lista completa
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    /// Acceso prestado a la lista (sin clonar)
    pub fn with_entries<R>(&self, f: impl FnOnce(&[Entry]) -> R) -> R {
        f(&self.entries.borrow())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Última entrada (la más reciente)
    pub fn last(&self) -> Option<Entry> {
        self.entries.borrow().last().cloned()
    }

    pub fn state(&self) -> StoreState {
        if self.is_empty() {
            StoreState::Empty
        } else {
            StoreState::NonEmpty
        }
    }

    /// Snapshot JSON: `[{"userInput": "..."}, ...]`
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(&*self.entries.borrow())
            .map_err(|e| format!("Error serializando entradas: {}", e))
    }

    /// Suscribirse a mutaciones del store
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn log_snapshot(&self, label: &str) {
        if log::log_enabled!(log::Level::Debug) {
            match self.to_json() {
                Ok(json) => log::debug!("📦 [STORE] {}: {}", label, json),
                Err(e) => log::warn!("⚠️ [STORE] {}", e),
            }
        }
    }
}

impl Default for EntryListStore {
    fn default() -> Self {
        Self::new()
    }
}
