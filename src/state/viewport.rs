//! Viewport Module - Viewport width state and resize subscriptions
//!
//! The host's event loop reports resize events through [`dispatch_resize`].
//! Components subscribe with [`subscribe`] and receive a payload-free
//! notification for every event, in the order events were dispatched; they
//! read the new width with [`viewport_width`].
//!
//! # Example
//!
//! ```ignore
//! use spark_sections::state::viewport;
//!
//! let subscription = viewport::subscribe(|| {
//!     println!("width is now {}", viewport::viewport_width());
//! });
//!
//! viewport::dispatch_resize(1280); // prints "width is now 1280"
//!
//! subscription.cancel();
//! viewport::dispatch_resize(640); // nothing printed
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::{debug, trace};

/// Width assumed before the host reports anything.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

/// Resize callback. Takes no arguments; re-read [`viewport_width`] instead.
pub type ResizeHandler = Rc<dyn Fn()>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static VIEWPORT_WIDTH: Signal<u32> = signal(DEFAULT_VIEWPORT_WIDTH);
}

/// Get the current viewport width.
pub fn viewport_width() -> u32 {
    VIEWPORT_WIDTH.with(|w| w.get())
}

/// Set the viewport width without notifying subscribers (initial sizing).
pub fn set_viewport_width(width: u32) {
    VIEWPORT_WIDTH.with(|w| w.set(width));
}

/// Get the viewport width signal for reactive tracking.
pub fn viewport_width_signal() -> Signal<u32> {
    VIEWPORT_WIDTH.with(|w| w.clone())
}

// =============================================================================
// SUBSCRIBER REGISTRY
// =============================================================================

struct Subscriber {
    id: usize,
    active: Rc<Cell<bool>>,
    handler: ResizeHandler,
}

struct SubscriberRegistry {
    subscribers: Vec<Subscriber>,
    next_id: usize,
}

impl SubscriberRegistry {
    fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<SubscriberRegistry> = RefCell::new(SubscriberRegistry::new());
}

/// A live resize subscription.
///
/// Cancelling is idempotent. Dropping the handle cancels it, so a subscription
/// can never outlive the component that owns it.
pub struct ResizeSubscription {
    id: usize,
    active: Rc<Cell<bool>>,
}

impl ResizeSubscription {
    /// Stop receiving notifications. No callback runs after this returns.
    pub fn cancel(&self) {
        if !self.active.replace(false) {
            return;
        }
        let id = self.id;
        // The handler is dropped outside the borrow; it may own other subscriptions.
        // try_with: the registry may already be gone during thread teardown.
        let removed = REGISTRY
            .try_with(|reg| {
                let mut reg = reg.borrow_mut();
                let position = reg.subscribers.iter().position(|s| s.id == id);
                position.map(|i| reg.subscribers.remove(i))
            })
            .ok()
            .flatten();
        drop(removed);
        debug!(id, "resize subscription cancelled");
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to viewport resize events.
pub fn subscribe<F>(handler: F) -> ResizeSubscription
where
    F: Fn() + 'static,
{
    let active = Rc::new(Cell::new(true));
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.subscribers.push(Subscriber {
            id,
            active: active.clone(),
            handler: Rc::new(handler),
        });
        id
    });

    ResizeSubscription { id, active }
}

/// Deliver one resize event.
///
/// Updates the width, then notifies every subscriber in subscription order.
/// Events are never coalesced. Subscribers cancelled by an earlier callback in
/// the same dispatch are skipped. Returns how many callbacks ran.
pub fn dispatch_resize(width: u32) -> usize {
    set_viewport_width(width);

    // Snapshot so callbacks may subscribe or cancel while we iterate.
    let snapshot: Vec<(Rc<Cell<bool>>, ResizeHandler)> = REGISTRY.with(|reg| {
        reg.borrow()
            .subscribers
            .iter()
            .map(|s| (s.active.clone(), s.handler.clone()))
            .collect()
    });

    let mut notified = 0;
    for (active, handler) in snapshot {
        if active.get() {
            handler();
            notified += 1;
        }
    }

    trace!(width, notified, "resize dispatched");
    notified
}

/// Number of live subscriptions on this thread.
pub fn subscriber_count() -> usize {
    REGISTRY.with(|reg| reg.borrow().subscribers.len())
}

/// Drop all subscribers and restore the default width (for testing).
pub fn reset_viewport_state() {
    let drained: Vec<Subscriber> = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.next_id = 0;
        reg.subscribers.drain(..).collect()
    });
    for s in &drained {
        s.active.set(false);
    }
    drop(drained);
    set_viewport_width(DEFAULT_VIEWPORT_WIDTH);
}

// =============================================================================
// TESTS
// =============================================================================
