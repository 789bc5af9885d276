//! The path resolver and history binder.
//!
//! [`Resolver`] owns the navigation state of a session: the current route,
//! its own [`HistoryStack`], the host history it mirrors into, and the
//! [`Navigator`] queue through which every navigation event arrives.
//!
//! # State machine
//!
//! ```text
//!            event                 lookup ok
//!   Idle ──────────▶ Resolving ──────────────▶ Active(route)
//!                        │ ▲                        │
//!           lookup fails │ └────────── event ───────┤
//!                        ▼                          │
//!                    NotFound ◀─────────────────────┘
//! ```
//!
//! Events are handled strictly one at a time, in delivery order:
//!
//! 1. Resolve the target against the [`RouteTable`].
//! 2. Run `before_commit` middleware.
//! 3. Discard a programmatic event if a newer one that can commit is already
//!    waiting. A request for an unknown route name never discards anything.
//! 4. Write history (push, replace, or move the cursor for traversals) and
//!    mirror it to the host.
//! 5. Update the current route and run `after_commit` middleware.
//!
//! An unmatched path is not a failure of the resolver: it is recorded in
//! history like any other and the not-found view is displayed in its place.
//!
//! # Example
//!
//! ```
//! use media_navigator::{
//!     MemoryHistory, NavigateOptions, Resolver, RouteRecordInput, RouteTable,
//! };
//!
//! let table = RouteTable::from_records([
//!     RouteRecordInput::new("/", "Dashboard", "dashboard"),
//!     RouteRecordInput::new("/video-frames", "VideoFrames", "frames"),
//! ])
//! .unwrap();
//!
//! let mut resolver = Resolver::new(table, MemoryHistory::new(), "not-found");
//! resolver.start("/");
//! resolver.navigate_to("/video-frames", NavigateOptions::push());
//! assert_eq!(resolver.view(), Some(&"frames"));
//!
//! resolver.back();
//! assert_eq!(resolver.view(), Some(&"dashboard"));
//! ```

use crate::error::{NavigationError, NavigationResult};
use crate::history::{HistoryEntry, HistoryHost, HistoryStack};
#[cfg(feature = "middleware")]
use crate::middleware::{MiddlewareChain, NavigationMiddleware};
use crate::navigator::{NavigationEvent, QueuedEvent};
use crate::route::RouteRecord;
use crate::table::RouteTable;
use crate::{
    debug_log, info_log, warn_log, HistoryEvent, NavigateOptions, NavigationDirection,
    NavigationRequest, Navigator, RouteChangeEvent,
};
use std::sync::Arc;

// ============================================================================
// Options
// ============================================================================

/// Startup settings for a [`Resolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions<V> {
    /// View displayed when no route matches.
    pub not_found_view: V,
    /// Location to resolve immediately, as for an initial page load.
    pub initial_path: Option<String>,
}

impl<V> RouterOptions<V> {
    /// Options with a not-found view and no initial path.
    pub fn new(not_found_view: V) -> Self {
        Self {
            not_found_view,
            initial_path: None,
        }
    }

    /// Resolve `path` as soon as the resolver is created.
    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = Some(path.into());
        self
    }
}

// ============================================================================
// Current route
// ============================================================================

/// What the resolver currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentRoute<V> {
    /// A registered route.
    Active(Arc<RouteRecord<V>>),
    /// No route matched `path`; the not-found view is shown.
    NotFound { path: String },
}

impl<V> CurrentRoute<V> {
    /// The matched route, if any.
    pub fn route(&self) -> Option<&Arc<RouteRecord<V>>> {
        match self {
            CurrentRoute::Active(route) => Some(route),
            CurrentRoute::NotFound { .. } => None,
        }
    }

    /// Path being displayed.
    pub fn path(&self) -> &str {
        match self {
            CurrentRoute::Active(route) => route.path(),
            CurrentRoute::NotFound { path } => path,
        }
    }

    /// Check if the current path has no route
    pub fn is_not_found(&self) -> bool {
        matches!(self, CurrentRoute::NotFound { .. })
    }
}

/// Resolver state, as described by the navigation state machine.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolverState<'a, V> {
    /// No navigation has happened yet.
    Idle,
    /// A navigation event is being matched.
    ///
    /// Processing holds the resolver exclusively, so [`Resolver::state`] never
    /// returns this to callers. Middleware runs inside this phase and sees the
    /// pending [`NavigationRequest`] instead.
    Resolving,
    /// A route is displayed.
    Active(&'a Arc<RouteRecord<V>>),
    /// No route matched the displayed path.
    NotFound(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Settled,
    Resolving,
}

// ============================================================================
// Resolver
// ============================================================================

/// Matches navigation events against a [`RouteTable`] and keeps history in
/// step with the displayed route.
pub struct Resolver<V, H> {
    table: RouteTable<V>,
    host: H,
    navigator: Navigator,
    history: HistoryStack,
    current: Option<CurrentRoute<V>>,
    phase: Phase,
    not_found_view: V,
    #[cfg(feature = "middleware")]
    middleware: MiddlewareChain,
}

impl<V, H: HistoryHost> Resolver<V, H> {
    /// Create a resolver and subscribe it to the host history.
    pub fn new(table: RouteTable<V>, mut host: H, not_found_view: V) -> Self {
        let navigator = Navigator::new();
        host.subscribe(navigator.clone());
        info_log!("Resolver bound to host history ({} routes)", table.len());
        Self {
            table,
            host,
            navigator,
            history: HistoryStack::new(),
            current: None,
            phase: Phase::Settled,
            not_found_view,
            #[cfg(feature = "middleware")]
            middleware: MiddlewareChain::default(),
        }
    }

    /// Create a resolver from [`RouterOptions`], resolving the initial path
    /// if one is set.
    pub fn with_options(table: RouteTable<V>, host: H, options: RouterOptions<V>) -> Self {
        let mut resolver = Self::new(table, host, options.not_found_view);
        if let Some(path) = options.initial_path {
            resolver.start(path);
        }
        resolver
    }

    /// Register middleware.
    #[cfg(feature = "middleware")]
    pub fn add_middleware(&mut self, middleware: impl NavigationMiddleware) {
        self.middleware.add(Box::new(middleware));
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Resolve the location the application was opened at.
    ///
    /// The host already shows this entry, so it is replaced rather than
    /// pushed.
    pub fn start(&mut self, path: impl Into<String>) -> NavigationResult {
        self.dispatch(NavigationEvent::Initial { path: path.into() })
    }

    /// Navigate to a path.
    pub fn navigate_to(
        &mut self,
        path: impl Into<String>,
        options: NavigateOptions,
    ) -> NavigationResult {
        self.dispatch(NavigationEvent::Navigate {
            path: path.into(),
            options,
        })
    }

    /// Navigate to the route carrying `name`.
    pub fn navigate_by_name(
        &mut self,
        name: impl Into<String>,
        options: NavigateOptions,
    ) -> NavigationResult {
        self.dispatch(NavigationEvent::NavigateByName {
            name: name.into(),
            options,
        })
    }

    /// Handle a back/forward traversal reported by the host.
    ///
    /// Never writes a new host entry.
    pub fn on_history_change(&mut self, event: HistoryEvent) -> NavigationResult {
        self.dispatch(NavigationEvent::Traversal(event))
    }

    /// Ask the host to go back one entry and process what it delivers.
    ///
    /// Returns `None` when the host delivered nothing (at the start of
    /// history, or a host that reports traversals later).
    pub fn back(&mut self) -> Option<NavigationResult> {
        self.host.go(-1);
        self.process_pending().pop()
    }

    /// Ask the host to go forward one entry and process what it delivers.
    pub fn forward(&mut self) -> Option<NavigationResult> {
        self.host.go(1);
        self.process_pending().pop()
    }

    /// Process every queued event, oldest first.
    pub fn process_pending(&mut self) -> Vec<NavigationResult> {
        let mut results = Vec::new();
        while let Some(queued) = self.navigator.pop() {
            results.push(self.process(queued, false));
        }
        results
    }

    /// Handle `event` in its place after everything already queued, then
    /// process whatever its hooks queued.
    fn dispatch(&mut self, event: NavigationEvent) -> NavigationResult {
        let id = self.navigator.next_id();
        debug_log!("Dispatching navigation #{}: {:?}", id.get(), event);
        let supersedes = self.can_supersede(&event);
        while let Some(earlier) = self.navigator.pop_before(id) {
            self.process(earlier, supersedes);
        }
        let result = self.process(QueuedEvent { id, event }, false);
        self.process_pending();
        result
    }

    /// `newer_waiting` is set when a newer event that can supersede this one
    /// is held outside the queue.
    fn process(&mut self, queued: QueuedEvent, newer_waiting: bool) -> NavigationResult {
        self.phase = Phase::Resolving;
        let result = self.resolve_and_commit(queued, newer_waiting);
        self.phase = Phase::Settled;
        result
    }

    /// Check if `event` would discard an older programmatic navigation.
    ///
    /// Only programmatic navigations that can commit qualify: a request for
    /// an unknown route name leaves the older navigation in place.
    fn can_supersede(&self, event: &NavigationEvent) -> bool {
        match event {
            NavigationEvent::Navigate { .. } => true,
            NavigationEvent::NavigateByName { name, .. } => {
                self.table.lookup_by_name(name).is_some()
            }
            NavigationEvent::Initial { .. } | NavigationEvent::Traversal(_) => false,
        }
    }

    fn resolve_and_commit(&mut self, queued: QueuedEvent, newer_waiting: bool) -> NavigationResult {
        let QueuedEvent { id, event } = queued;
        let programmatic = event.is_programmatic();
        debug_log!("Resolving navigation #{}", id.get());

        let (path, write) = match event {
            NavigationEvent::Initial { path } => (path, Write::Initial),
            NavigationEvent::Navigate { path, options } => (path, Write::from(options)),
            NavigationEvent::NavigateByName { name, options } => {
                match self.table.lookup_by_name(&name) {
                    Some(route) => (route.path().to_string(), Write::from(options)),
                    None => {
                        warn_log!("No route named '{}'", name);
                        return NavigationResult::Error(NavigationError::UnknownRouteName {
                            name,
                        });
                    }
                }
            }
            NavigationEvent::Traversal(event) => {
                let path = event.path.clone();
                (path, Write::Traversal(event))
            }
        };

        let route = self.table.lookup(&path).cloned();
        let target = route
            .as_ref()
            .map_or(path, |route| route.path().to_string());
        let from = self.current.as_ref().map(|c| c.path().to_string());

        let request = NavigationRequest {
            from: from.clone(),
            to: target.clone(),
            route_name: route.as_ref().map(|r| r.name().to_string()),
            direction: self.planned_direction(&write),
        };

        #[cfg(feature = "middleware")]
        self.middleware.before(&request, &self.navigator);

        let superseded = newer_waiting
            || self
                .navigator
                .has_newer(id, |event| self.can_supersede(event));
        if programmatic && superseded {
            debug_log!("Navigation #{} to '{}' superseded", id.get(), target);
            return NavigationResult::Discarded { path: target };
        }

        let (direction, host_result) = self.write_history(&target, write);

        self.current = Some(match route {
            Some(route) => {
                info_log!("Navigation {:?}: → '{}' ({})", direction, target, route.name());
                CurrentRoute::Active(route)
            }
            None => {
                warn_log!("No route for '{}', showing not-found view", target);
                CurrentRoute::NotFound {
                    path: target.clone(),
                }
            }
        });

        let change = RouteChangeEvent {
            from,
            to: target.clone(),
            direction,
        };
        #[cfg(feature = "middleware")]
        self.middleware.after(&change, &self.navigator);
        #[cfg(not(feature = "middleware"))]
        let _ = change;

        match host_result {
            Err(message) => {
                warn_log!("History host rejected '{}': {}", target, message);
                NavigationResult::Error(NavigationError::Host {
                    path: target,
                    message,
                })
            }
            Ok(()) if request.is_matched() => NavigationResult::Active { path: target },
            Ok(()) => NavigationResult::NotFound { path: target },
        }
    }

    /// Direction reported to `before_commit` middleware.
    fn planned_direction(&self, write: &Write) -> NavigationDirection {
        match write {
            Write::Initial => NavigationDirection::Initial,
            Write::Push => NavigationDirection::Push,
            Write::Replace => NavigationDirection::Replace,
            Write::Traversal(event) => match self.history.locate(event) {
                Some(target) if target < self.history.position() => NavigationDirection::Back,
                Some(target) if target > self.history.position() => NavigationDirection::Forward,
                _ => NavigationDirection::Replace,
            },
        }
    }

    /// Record `path` in history and mirror the change to the host.
    fn write_history(
        &mut self,
        path: &str,
        write: Write,
    ) -> (NavigationDirection, Result<(), String>) {
        match write {
            Write::Initial => {
                let position = self.history.replace(path.to_string());
                let entry = HistoryEntry {
                    path: path.to_string(),
                    position,
                };
                let written = self.host.replace(&entry).map_err(|e| e.message);
                (NavigationDirection::Initial, written)
            }
            Write::Push => {
                let position = self.history.push(path.to_string());
                let entry = HistoryEntry {
                    path: path.to_string(),
                    position,
                };
                let written = self.host.push(&entry).map_err(|e| e.message);
                (NavigationDirection::Push, written)
            }
            Write::Replace => {
                let position = self.history.replace(path.to_string());
                let entry = HistoryEntry {
                    path: path.to_string(),
                    position,
                };
                let written = self.host.replace(&entry).map_err(|e| e.message);
                (NavigationDirection::Replace, written)
            }
            Write::Traversal(event) => match self.history.traverse(&event) {
                Some(direction) => (direction, Ok(())),
                None => {
                    warn_log!(
                        "Host moved to unrecorded entry '{}', replacing current entry",
                        event.path
                    );
                    self.history.replace(path.to_string());
                    (NavigationDirection::Replace, Ok(()))
                }
            },
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The displayed route, `None` before the first navigation.
    pub fn current(&self) -> Option<&CurrentRoute<V>> {
        self.current.as_ref()
    }

    /// State-machine view of the resolver.
    pub fn state(&self) -> ResolverState<'_, V> {
        if self.phase == Phase::Resolving {
            return ResolverState::Resolving;
        }
        match &self.current {
            None => ResolverState::Idle,
            Some(CurrentRoute::Active(route)) => ResolverState::Active(route),
            Some(CurrentRoute::NotFound { path }) => ResolverState::NotFound(path),
        }
    }

    /// View to display: the active route's view, or the not-found view.
    pub fn view(&self) -> Option<&V> {
        self.current.as_ref().map(|current| match current {
            CurrentRoute::Active(route) => route.view(),
            CurrentRoute::NotFound { .. } => &self.not_found_view,
        })
    }

    /// The designated not-found view.
    pub fn not_found_view(&self) -> &V {
        &self.not_found_view
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Recorded history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// The host history.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host history.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Handle for queueing navigations from elsewhere in the application.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// Check if history has an entry before the current one
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Check if history has an entry after the current one
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }
}

impl<V, H> std::fmt::Debug for Resolver<V, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("routes", &self.table.len())
            .field("current", &self.current.as_ref().map(CurrentRoute::path))
            .field("history", &self.history.entries())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// How a resolved navigation is written to history.
#[derive(Debug)]
enum Write {
    Initial,
    Push,
    Replace,
    Traversal(HistoryEvent),
}

impl From<NavigateOptions> for Write {
    fn from(options: NavigateOptions) -> Self {
        if options.replace {
            Write::Replace
        } else {
            Write::Push
        }
    }
}
