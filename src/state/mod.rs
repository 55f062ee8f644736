// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod entry_list_state;
pub mod app_state;

pub use reactivity::*;
pub use entry_list_state::*;
pub use app_state::*;
