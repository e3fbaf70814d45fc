//! Observable dialog state
//!
//! [`DialogStore`] holds the single [`DialogRequest`] the UI may show at a
//! time and notifies subscribers synchronously whenever it is replaced.
//! The store is a dumb holder: it performs no validation, and correctness
//! of the Hidden → Pending → Hidden cycle is up to its callers.
//!
//! The UI is single-threaded, so the store is built on `Rc`/`RefCell` and
//! each UI thread gets its own process-wide instance via
//! [`DialogStore::global`].

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use tokio::sync::oneshot;

/// Which controls the presenter shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    /// Message with a single OK control
    #[default]
    Confirmation,
    /// Message, text field, OK and Cancel
    Input,
}

/// Value a completion handle is resolved with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResponse {
    /// The user acknowledged a confirmation
    Acknowledged,
    /// The user accepted an input with this text
    Text(String),
    /// The user dismissed the dialog
    Cancelled,
}

/// One-shot completion handle shared by every copy of a request
///
/// Only the first call to [`Completion::complete`] delivers a value; later
/// calls are ignored and return `false`.
#[derive(Clone)]
pub struct Completion {
    sender: Rc<RefCell<Option<oneshot::Sender<DialogResponse>>>>,
}

impl Completion {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<DialogResponse>) {
        let (tx, rx) = oneshot::channel();
        let completion = Self {
            sender: Rc::new(RefCell::new(Some(tx))),
        };
        (completion, rx)
    }

    /// Resolve the pending request. Returns whether this call delivered it.
    pub fn complete(&self, response: DialogResponse) -> bool {
        let sender = self.sender.borrow_mut().take();
        match sender {
            // The waiting side may have gone away; the handle is spent either way
            Some(tx) => {
                let _ = tx.send(response);
                true
            }
            None => false,
        }
    }

    /// Whether the handle has already fired
    pub fn is_spent(&self) -> bool {
        self.sender.borrow().is_none()
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("spent", &self.is_spent())
            .finish()
    }
}

/// The dialog currently requested of the user
#[derive(Debug, Clone, Default)]
pub struct DialogRequest {
    pub visible: bool,
    pub kind: DialogKind,
    pub message: String,
    pub default_value: Option<String>,
    pub complete: Option<Completion>,
}

impl DialogRequest {
    /// The initial, hidden state
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Whether a request is awaiting the user
    pub fn is_pending(&self) -> bool {
        self.visible && self.complete.as_ref().is_some_and(|c| !c.is_spent())
    }
}

type Callback = Rc<RefCell<dyn FnMut(&DialogRequest)>>;

struct Inner {
    state: RefCell<DialogRequest>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
    next_id: Cell<u64>,
    // States set while subscribers are running, delivered in order
    queued: RefCell<VecDeque<DialogRequest>>,
    notifying: Cell<bool>,
}

/// Process-wide observable holding the current [`DialogRequest`]
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct DialogStore {
    inner: Rc<Inner>,
}

thread_local! {
    static GLOBAL_STORE: DialogStore = DialogStore::new();
}

impl DialogStore {
    /// Create an independent store in the hidden state
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(DialogRequest::hidden()),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                queued: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// The store shared by every call site on this UI thread
    pub fn global() -> Self {
        GLOBAL_STORE.with(Clone::clone)
    }

    /// Snapshot of the current state
    pub fn current(&self) -> DialogRequest {
        self.inner.state.borrow().clone()
    }

    /// Replace the whole state and notify every subscriber
    pub fn set(&self, state: DialogRequest) {
        let snapshot = state.clone();
        // The old request is dropped here, after the borrow is released
        let previous = self.inner.state.replace(state);
        drop(previous);
        self.notify(snapshot);
    }

    /// Reset to the hidden state
    pub fn reset(&self) {
        self.set(DialogRequest::hidden());
    }

    /// Register a callback; it runs now with the current state and again
    /// after every [`set`](Self::set)
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&DialogRequest) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let callback: Callback = Rc::new(RefCell::new(callback));
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::clone(&callback)));

        let current = self.current();
        let outermost = !self.inner.notifying.replace(true);
        (&mut *callback.borrow_mut())(&current);
        if outermost {
            self.drain();
        }

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self, state: DialogRequest) {
        self.inner.queued.borrow_mut().push_back(state);
        // A set from inside a callback is delivered once the current pass ends
        if self.inner.notifying.replace(true) {
            return;
        }
        self.drain();
    }

    fn drain(&self) {
        loop {
            let next = self.inner.queued.borrow_mut().pop_front();
            let Some(state) = next else { break };

            // Snapshot so callbacks may subscribe or unsubscribe re-entrantly
            let callbacks: Vec<Callback> = self
                .inner
                .subscribers
                .borrow()
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect();

            for callback in callbacks {
                (&mut *callback.borrow_mut())(&state);
            }
        }
        self.inner.notifying.set(false);
    }
}

impl Default for DialogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`DialogStore::subscribe`]; unsubscribes on drop
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Stop receiving notifications
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
