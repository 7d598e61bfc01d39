use crate::position::SheetPosition;
use std::fmt;

/// Handle returned when registering a position listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(SheetPosition)>;

/// Callbacks interested in position changes, invoked in registration order.
///
/// Lives on the UI thread together with the controller, so listeners need not
/// be `Send`.
#[derive(Default)]
pub struct PositionListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl PositionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl FnMut(SheetPosition) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, position: SheetPosition) {
        for (_, listener) in self.entries.iter_mut() {
            listener(position);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PositionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionListeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = PositionListeners::new();

        let first = Rc::clone(&log);
        listeners.add(move |position| first.borrow_mut().push(("first", position)));
        let second = Rc::clone(&log);
        listeners.add(move |position| second.borrow_mut().push(("second", position)));

        listeners.notify(SheetPosition::Middle(444.0));

        assert_eq!(
            log.borrow().as_slice(),
            &[
                ("first", SheetPosition::Middle(444.0)),
                ("second", SheetPosition::Middle(444.0)),
            ]
        );
    }

    #[test]
    fn removed_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut listeners = PositionListeners::new();

        let counter = Rc::clone(&calls);
        let id = listeners.add(move |_| *counter.borrow_mut() += 1);
        assert_eq!(listeners.len(), 1);

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert!(listeners.is_empty());

        listeners.notify(SheetPosition::Up(750.0));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut listeners = PositionListeners::new();
        let a = listeners.add(|_| {});
        listeners.remove(a);
        let b = listeners.add(|_| {});
        assert_ne!(a, b);
    }
}
