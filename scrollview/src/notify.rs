//! Change notification for scroll view properties.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Observable properties of a scroll view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    HscrollbarPolicy,
    VscrollbarPolicy,
    HscrollbarVisible,
    VscrollbarVisible,
    MouseScroll,
    OverlayScrollbars,
}

type Callback = Rc<dyn Fn(Property)>;

/// Per-property observer lists with batching.
///
/// While a [`NotifyBatch`] is alive, notifications are queued (each property
/// at most once) and delivered together when the outermost batch ends.
#[derive(Default)]
pub struct Notifier {
    observers: RefCell<Vec<(Property, Callback)>>,
    freeze_count: Cell<usize>,
    pending: RefCell<Vec<Property>>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.borrow().len())
            .field("freeze_count", &self.freeze_count.get())
            .field("pending", &self.pending.borrow())
            .finish()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` whenever `property` changes.
    pub fn connect<F>(&self, property: Property, callback: F)
    where
        F: Fn(Property) + 'static,
    {
        self.observers
            .borrow_mut()
            .push((property, Rc::new(callback)));
    }

    /// Report a change, or queue it if a batch is open.
    pub fn notify(&self, property: Property) {
        if self.freeze_count.get() > 0 {
            let mut pending = self.pending.borrow_mut();
            if !pending.contains(&property) {
                pending.push(property);
            }
            return;
        }
        self.dispatch(property);
    }

    /// Open a batch. Notifications are held until the returned guard, and
    /// every enclosing one, is dropped.
    pub fn freeze(&self) -> NotifyBatch<'_> {
        self.freeze_count.set(self.freeze_count.get() + 1);
        NotifyBatch { notifier: self }
    }

    fn thaw(&self) {
        let count = self.freeze_count.get().saturating_sub(1);
        self.freeze_count.set(count);
        if count > 0 {
            return;
        }
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for property in pending {
            self.dispatch(property);
        }
    }

    /// Callbacks run on a snapshot of the observer list, so they may connect
    /// further observers. Those are first called on the next notification.
    fn dispatch(&self, property: Property) {
        let callbacks: Vec<Callback> = self
            .observers
            .borrow()
            .iter()
            .filter(|(p, _)| *p == property)
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(property);
        }
    }
}

/// Scope guard returned by [`Notifier::freeze`].
#[must_use = "notifications are released as soon as the batch is dropped"]
pub struct NotifyBatch<'a> {
    notifier: &'a Notifier,
}

impl Drop for NotifyBatch<'_> {
    fn drop(&mut self) {
        self.notifier.thaw();
    }
}
