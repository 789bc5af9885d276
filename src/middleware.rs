//! Navigation middleware.
//!
//! Middleware observes navigations around the moment they are committed to
//! history: `before_commit` runs once the target has been resolved, and
//! `after_commit` runs once history and the current route have been updated.
//! Middleware never decides *whether* a navigation happens.
//!
//! Hooks receive the resolver's [`Navigator`]. Navigations requested from a
//! hook are queued and processed after the current one completes. A
//! programmatic navigation queued from `before_commit` supersedes the one
//! being committed, which is then discarded.
//!
//! All methods are **synchronous**; the router runs on a single execution
//! context.
//!
//! # Execution order
//!
//! Middleware runs in **priority order** (higher
//! [`priority`](NavigationMiddleware::priority) first) for `before_commit`,
//! and in reverse order for `after_commit` (onion model).
//!
//! # Example
//!
//! ```no_run
//! use media_navigator::{NavigationMiddleware, NavigationRequest, Navigator, RouteChangeEvent};
//!
//! struct PageViews;
//!
//! impl NavigationMiddleware for PageViews {
//!     fn before_commit(&self, request: &NavigationRequest, _navigator: &Navigator) {
//!         println!("Opening: {}", request.to);
//!     }
//!
//!     fn after_commit(&self, event: &RouteChangeEvent, _navigator: &Navigator) {
//!         println!("Showing: {}", event.to);
//!     }
//! }
//! ```

use crate::{NavigationRequest, Navigator, RouteChangeEvent};

// ============================================================================
// NavigationMiddleware trait
// ============================================================================

/// Hooks run around every committed navigation.
pub trait NavigationMiddleware: 'static {
    /// Called after resolution, before history is written.
    fn before_commit(&self, request: &NavigationRequest, navigator: &Navigator);

    /// Called after history and the current route are updated.
    fn after_commit(&self, event: &RouteChangeEvent, navigator: &Navigator);

    /// Middleware name for debugging.
    fn name(&self) -> &'static str {
        "NavigationMiddleware"
    }

    /// Middleware priority (higher runs first for `before`, last for `after`).
    fn priority(&self) -> i32 {
        0
    }
}

// ============================================================================
// middleware_fn helper
// ============================================================================

/// Create middleware from two closures (before and after).
///
/// # Example
///
/// ```no_run
/// use media_navigator::middleware_fn;
///
/// let mw = middleware_fn(
///     |request, _navigator| println!("Before: {}", request.to),
///     |event, _navigator| println!("After: {}", event.to),
/// );
/// ```
pub const fn middleware_fn<B, A>(before: B, after: A) -> FnMiddleware<B, A>
where
    B: Fn(&NavigationRequest, &Navigator) + 'static,
    A: Fn(&RouteChangeEvent, &Navigator) + 'static,
{
    FnMiddleware { before, after }
}

/// Middleware created from two closures via [`middleware_fn`].
pub struct FnMiddleware<B, A> {
    before: B,
    after: A,
}

impl<B, A> NavigationMiddleware for FnMiddleware<B, A>
where
    B: Fn(&NavigationRequest, &Navigator) + 'static,
    A: Fn(&RouteChangeEvent, &Navigator) + 'static,
{
    fn before_commit(&self, request: &NavigationRequest, navigator: &Navigator) {
        (self.before)(request, navigator);
    }

    fn after_commit(&self, event: &RouteChangeEvent, navigator: &Navigator) {
        (self.after)(event, navigator);
    }
}

/// Registered middleware, kept sorted for `before_commit` order.
#[derive(Default)]
pub(crate) struct MiddlewareChain {
    entries: Vec<Box<dyn NavigationMiddleware>>,
}

impl MiddlewareChain {
    pub(crate) fn add(&mut self, middleware: Box<dyn NavigationMiddleware>) {
        crate::debug_log!(
            "Registered middleware '{}' (priority {})",
            middleware.name(),
            middleware.priority()
        );
        self.entries.push(middleware);
        // Stable: equal priorities keep registration order
        self.entries
            .sort_by_key(|mw| std::cmp::Reverse(mw.priority()));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn before(&self, request: &NavigationRequest, navigator: &Navigator) {
        for mw in &self.entries {
            crate::trace_log!("Middleware '{}' before '{}'", mw.name(), request.to);
            mw.before_commit(request, navigator);
        }
    }

    pub(crate) fn after(&self, event: &RouteChangeEvent, navigator: &Navigator) {
        for mw in self.entries.iter().rev() {
            crate::trace_log!("Middleware '{}' after '{}'", mw.name(), event.to);
            mw.after_commit(event, navigator);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
