//! Signals: how the pager widgets publish notifications.
//!
//! Every observable event (a tab gaining the highlight, a page scrolling into
//! view, tiles needing a redraw) is a public [`Signal<Args>`] field on the
//! widget. Hosts attach closures to the events they care about and ignore the
//! rest; an event with nothing attached costs one lock and an empty loop.
//!
//! - [`Signal<Args>`]: a list of slots sharing one argument type
//! - [`ConnectionId`]: handle for detaching a slot
//! - [`ConnectionGuard`]: detaches its slot when dropped
//!
//! # Delivery
//!
//! The pager runs entirely on the host's UI thread, so every slot is invoked
//! synchronously, in connection order, on the thread that calls
//! [`Signal::emit`]. Slots are snapshotted before invocation: a slot may
//! connect or disconnect slots on the same signal while it runs, and those
//! changes take effect from the next emission.
//!
//! ```
//! use horizon_pager_core::Signal;
//!
//! let tab_selected = Signal::<usize>::new();
//! let id = tab_selected.connect(|index| println!("tab {index} highlighted"));
//!
//! tab_selected.emit(1);
//! assert!(tab_selected.disconnect(id));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle for a connected slot, valid until it is disconnected.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A notification that any number of slots can listen to.
///
/// Slots receive the emitted value by reference. Events without a payload use
/// `Signal<()>`; events with several values use a tuple, as in
/// `Signal<(MenuItem, PageIndex)>`.
///
/// A signal is `Send + Sync` so the widgets that own signals are too.
pub struct Signal<Args> {
    /// Shared with scoped guards through a `Weak`.
    connections: Arc<SlotTable<Args>>,
    blocked: AtomicBool,
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Attach `slot`. It runs on every emission until disconnected.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Detach the slot behind `id`. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Suppress emissions until unblocked. Emissions while blocked are dropped,
    /// not queued.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Run every connected slot with `args`, oldest connection first.
    #[tracing::instrument(skip_all, target = "horizon_pager_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "horizon_pager_core::signal", "emission suppressed");
            return;
        }

        // Release the lock before invoking so slots may touch this signal.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: "horizon_pager_core::signal", slots = slots.len(), "emitting");

        for slot in &slots {
            slot(&args);
        }
    }

    /// Attach `slot` for as long as the returned guard lives.
    ///
    /// The guard holds only a weak reference to the slot table, so dropping it
    /// after the signal is gone is fine.
    ///
    /// ```
    /// use horizon_pager_core::Signal;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let page_changed = Signal::<usize>::new();
    /// let visits = Arc::new(AtomicUsize::new(0));
    ///
    /// let v = visits.clone();
    /// let guard = page_changed.connect_scoped(move |_| {
    ///     v.fetch_add(1, Ordering::SeqCst);
    /// });
    /// page_changed.emit(1);
    /// drop(guard);
    /// page_changed.emit(2);
    ///
    /// assert_eq!(visits.load(Ordering::SeqCst), 1);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            connections: Arc::downgrade(&self.connections),
            id: self.connect(slot),
        }
    }
}

/// Keeps a slot connected while alive. See [`Signal::connect_scoped`].
pub struct ConnectionGuard<Args> {
    connections: Weak<SlotTable<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(connections) = self.connections.upgrade() {
            connections.lock().remove(self.id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<(String, usize)>: Send, Sync);
