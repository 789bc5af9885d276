//! # media-navigator
//!
//! Navigation layer for the media utility application: a validated route
//! table mapping URL paths to views, and a resolver that keeps the displayed
//! view and the host's back/forward history in step.
//!
//! ## Quick start
//!
//! ```
//! use media_navigator::catalog::{media_table, MediaView};
//! use media_navigator::{MemoryHistory, NavigateOptions, Resolver};
//!
//! let table = media_table().expect("route table must be valid at startup");
//! let mut resolver = Resolver::new(table, MemoryHistory::new(), MediaView::NotFound);
//!
//! resolver.start("/");
//! resolver.navigate_to("/video-geotagger-v3", NavigateOptions::push());
//! assert_eq!(resolver.view(), Some(&MediaView::VideoGeotaggerV3));
//!
//! resolver.navigate_to("/video-geotagger-v4", NavigateOptions::push());
//! assert_eq!(resolver.view(), Some(&MediaView::NotFound));
//! ```
//!
//! ## Features
//!
//! | Feature      | Default | Description                               |
//! |--------------|---------|-------------------------------------------|
//! | `log`        | yes     | Log through the `log` crate               |
//! | `tracing`    | no      | Log through `tracing` instead             |
//! | `middleware` | yes     | Before/after-commit navigation hooks      |
//! | `config`     | yes     | JSON route manifests (`serde_json`)       |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod catalog;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod history;
#[cfg(feature = "middleware")]
pub mod middleware;
pub mod navigator;
pub mod path;
pub mod resolver;
pub mod route;
pub mod table;

pub use error::{NavigationError, NavigationResult, RouteField, ValidationError};
pub use history::{
    HistoryEntry, HistoryEvent, HistoryHost, HistoryStack, HostError, MemoryHistory,
};
#[cfg(feature = "middleware")]
pub use middleware::{middleware_fn, FnMiddleware, NavigationMiddleware};
pub use navigator::{
    NavigateOptions, NavigationDirection, NavigationEvent, NavigationId, NavigationRequest,
    Navigator, RouteChangeEvent,
};
pub use path::canonical_path;
pub use resolver::{CurrentRoute, Resolver, ResolverState, RouterOptions};
pub use route::{RouteRecord, RouteRecordInput};
pub use table::RouteTable;
