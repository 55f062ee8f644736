// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Identificador devuelto por `subscribe`, necesario para `unsubscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn from_u32(raw: u32) -> Self {
        Self(raw)
    }
}

type Callback<E> = Rc<dyn Fn(&E)>;

/// Lista de subscribers compartida entre clones (Rc<RefCell>).
/// Un notify dentro de un callback solo encola: la cola se despacha en orden
/// FIFO desde el notify más externo.
pub struct Subscribers<E> {
    callbacks: Rc<RefCell<Vec<(SubscriptionId, Callback<E>)>>>,
    next_id: Rc<Cell<u32>>,
    pending: Rc<RefCell<VecDeque<E>>>,
    dispatching: Rc<Cell<bool>>,
}

impl<E> Subscribers<E> {
    /// Crear lista vacía
    pub fn new() -> Self {
        Self {
            callbacks: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(1)),
            pending: Rc::new(RefCell::new(VecDeque::new())),
            dispatching: Rc::new(Cell::new(false)),
        }
    }

    /// Suscribirse a eventos
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Cancelar suscripción. Retorna false si el id no existe.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    /// Notificar a todos los subscribers en orden de suscripción.
    /// Todos los subscribers ven los eventos en el orden en que se emitieron.
    pub fn notify(&self, event: E) {
        self.pending.borrow_mut().push_back(event);
        if self.dispatching.get() {
            return;
        }

        self.dispatching.set(true);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else { break };

            // Snapshot: los callbacks pueden suscribirse/desuscribirse o mutar el store
            let snapshot: Vec<Callback<E>> = self
                .callbacks
                .borrow()
                .iter()
                .map(|(_, cb)| cb.clone())
                .collect();

            for callback in snapshot {
                callback(&event);
            }
        }
        self.dispatching.set(false);
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Clone for Subscribers<E> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
            next_id: self.next_id.clone(),
            pending: self.pending.clone(),
            dispatching: self.dispatching.clone(),
        }
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_in_subscription_order() {
        let subs: Subscribers<u32> = Subscribers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s1 = seen.clone();
        subs.subscribe(move |v| s1.borrow_mut().push(("a", *v)));
        let s2 = seen.clone();
        subs.subscribe(move |v| s2.borrow_mut().push(("b", *v)));

        subs.notify(7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let subs: Subscribers<()> = Subscribers::new();
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        let id = subs.subscribe(move |_| c.set(c.get() + 1));
        subs.notify(());
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.notify(());

        assert_eq!(count.get(), 1);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_clones_share_callbacks() {
        let subs: Subscribers<()> = Subscribers::new();
        let other = subs.clone();
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        other.subscribe(move |_| c.set(c.get() + 1));
        subs.notify(());

        assert_eq!(count.get(), 1);
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_subscribe_during_notify_does_not_panic() {
        let subs: Subscribers<()> = Subscribers::new();
        let inner = subs.clone();
        subs.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        subs.notify(());
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_nested_notify_is_delivered_after_current_event() {
        let subs: Subscribers<u32> = Subscribers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner = subs.clone();
        subs.subscribe(move |v| {
            if *v == 1 {
                inner.notify(2);
            }
        });
        let sink = seen.clone();
        subs.subscribe(move |v| sink.borrow_mut().push(*v));

        subs.notify(1);
        assert_eq!(*seen.borrow(), vec![1, 2]);

        // La cola queda vacía y el siguiente notify despacha normalmente
        subs.notify(3);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ids_are_unique() {
        let subs: Subscribers<()> = Subscribers::new();
        let a = subs.subscribe(|_| {});
        let b = subs.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(SubscriptionId::from_u32(a.as_u32()), a);
    }
}
