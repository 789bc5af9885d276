//! Shared fixtures for integration tests.

#![allow(dead_code)]

use media_navigator::catalog::{media_table, MediaView};
use media_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type MediaResolver = Resolver<MediaView, MemoryHistory>;

/// Route the test logger output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fully populated route input with a string view.
pub fn record(path: &str, name: &str) -> RouteRecordInput<String> {
    RouteRecordInput::new(path, name, format!("view:{name}"))
}

/// Resolver over the media table with an in-memory host.
pub fn media_resolver() -> MediaResolver {
    init_logging();
    let table = media_table().expect("media table is valid");
    Resolver::new(table, MemoryHistory::new(), MediaView::NotFound)
}

/// Assert the resolver displays the route at `path`.
pub fn assert_active(resolver: &MediaResolver, path: &str, view: MediaView) {
    let current = resolver.current().expect("resolver has navigated");
    let route = current
        .route()
        .unwrap_or_else(|| panic!("expected active route at '{path}', got not-found"));
    assert_eq!(route.path(), path);
    assert_eq!(resolver.view(), Some(&view));
}

/// Paths recorded by the host, in host order.
pub fn host_paths(resolver: &MediaResolver) -> Vec<String> {
    resolver
        .host()
        .entries()
        .iter()
        .map(|entry| entry.path.clone())
        .collect()
}

/// Shared log of middleware calls.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}
