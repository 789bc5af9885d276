//! Navigation requests and the event queue.
//!
//! Every way of changing the displayed route (initial load, link activation,
//! programmatic navigation, a back/forward traversal from the host) becomes a
//! [`NavigationEvent`] in a single FIFO queue. The [`Resolver`](crate::Resolver)
//! drains that queue one event at a time, so an event delivered while another
//! is still being resolved waits its turn.
//!
//! [`Navigator`] is a cheap, cloneable handle to the queue. The resolver owns
//! one, subscribes the host history with a clone, and hands it to middleware so
//! hooks can request follow-up navigations. The handle is `!Send`: the whole
//! router runs on the single UI execution context.
//!
//! ```
//! use media_navigator::{NavigateOptions, Navigator};
//!
//! let navigator = Navigator::new();
//! navigator.navigate_to("/video-frames", NavigateOptions::push());
//! navigator.navigate_to("/video-geotagger-v3", NavigateOptions::replace());
//! assert_eq!(navigator.pending(), 2);
//! ```

use crate::debug_log;
use crate::history::HistoryEvent;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Requests and events
// ============================================================================

/// How a navigation is written to history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of adding one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Add a new history entry.
    pub const fn push() -> Self {
        Self { replace: false }
    }

    /// Overwrite the current history entry.
    pub const fn replace() -> Self {
        Self { replace: true }
    }
}

/// Direction of a route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// First resolution after startup.
    Initial,
    /// A new entry was added.
    Push,
    /// The current entry was overwritten.
    Replace,
    /// The host moved back through its history.
    Back,
    /// The host moved forward through its history.
    Forward,
}

/// Monotonic identifier of a queued navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavigationId(u64);

impl NavigationId {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A navigation waiting to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The location the application was opened at.
    Initial { path: String },
    /// A link activation or programmatic navigation by path.
    Navigate {
        path: String,
        options: NavigateOptions,
    },
    /// Programmatic navigation by route name.
    NavigateByName {
        name: String,
        options: NavigateOptions,
    },
    /// A back/forward traversal reported by the host.
    Traversal(HistoryEvent),
}

impl NavigationEvent {
    /// Link activation or programmatic navigation.
    ///
    /// Only these can be superseded. The host has already moved for a
    /// traversal, and the initial load describes the entry it opened with.
    pub fn is_programmatic(&self) -> bool {
        matches!(
            self,
            NavigationEvent::Navigate { .. } | NavigationEvent::NavigateByName { .. }
        )
    }
}

/// The navigation being committed, as seen by middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Current path before this navigation (if any)
    pub from: Option<String>,
    /// Path being navigated to
    pub to: String,
    /// Name of the matched route, `None` when the path has no route
    pub route_name: Option<String>,
    /// How the entry is written to history
    pub direction: NavigationDirection,
}

impl NavigationRequest {
    /// Create a request with no source path.
    pub fn new(to: impl Into<String>, direction: NavigationDirection) -> Self {
        Self {
            from: None,
            to: to.into(),
            route_name: None,
            direction,
        }
    }

    /// Check whether the target path has a registered route.
    pub fn is_matched(&self) -> bool {
        self.route_name.is_some()
    }
}

/// A committed route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// Previous path (if any)
    pub from: Option<String>,
    /// Path now displayed
    pub to: String,
    /// How history moved
    pub direction: NavigationDirection,
}

// ============================================================================
// Navigator
// ============================================================================

#[derive(Debug, Clone)]
pub(crate) struct QueuedEvent {
    pub(crate) id: NavigationId,
    pub(crate) event: NavigationEvent,
}

#[derive(Debug, Default)]
struct EventQueue {
    events: VecDeque<QueuedEvent>,
    next_id: u64,
}

/// Shared handle to the navigation event queue.
#[derive(Clone, Default)]
pub struct Navigator {
    queue: Rc<RefCell<EventQueue>>,
}

impl Navigator {
    /// Create a handle to a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event and return its id.
    pub fn enqueue(&self, event: NavigationEvent) -> NavigationId {
        let id = self.next_id();
        debug_log!("Queued navigation #{}: {:?}", id.0, event);
        self.queue
            .borrow_mut()
            .events
            .push_back(QueuedEvent { id, event });
        id
    }

    /// Allocate the id of an event handled without being queued.
    pub(crate) fn next_id(&self) -> NavigationId {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        NavigationId(queue.next_id)
    }

    /// Queue navigation to a path.
    pub fn navigate_to(&self, path: impl Into<String>, options: NavigateOptions) -> NavigationId {
        self.enqueue(NavigationEvent::Navigate {
            path: path.into(),
            options,
        })
    }

    /// Queue navigation to a named route.
    pub fn navigate_by_name(
        &self,
        name: impl Into<String>,
        options: NavigateOptions,
    ) -> NavigationId {
        self.enqueue(NavigationEvent::NavigateByName {
            name: name.into(),
            options,
        })
    }

    /// Report a host back/forward traversal.
    pub fn history_changed(&self, event: HistoryEvent) -> NavigationId {
        self.enqueue(NavigationEvent::Traversal(event))
    }

    /// Number of events waiting to be processed.
    pub fn pending(&self) -> usize {
        self.queue.borrow().events.len()
    }

    /// Check whether two handles share a queue.
    pub fn same_queue(&self, other: &Navigator) -> bool {
        Rc::ptr_eq(&self.queue, &other.queue)
    }

    pub(crate) fn pop(&self) -> Option<QueuedEvent> {
        self.queue.borrow_mut().events.pop_front()
    }

    /// Take the oldest event if it was queued before `id`.
    pub(crate) fn pop_before(&self, id: NavigationId) -> Option<QueuedEvent> {
        let mut queue = self.queue.borrow_mut();
        if queue.events.front().is_some_and(|queued| queued.id < id) {
            queue.events.pop_front()
        } else {
            None
        }
    }

    /// Check if an event newer than `id` satisfying `pred` is waiting.
    pub(crate) fn has_newer(
        &self,
        id: NavigationId,
        mut pred: impl FnMut(&NavigationEvent) -> bool,
    ) -> bool {
        self.queue
            .borrow()
            .events
            .iter()
            .any(|queued| queued.id > id && pred(&queued.event))
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}
