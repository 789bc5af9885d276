//! JSON route manifests.
//!
//! The route configuration can be kept as a versionable JSON document
//! instead of code:
//!
//! ```json
//! {
//!   "not_found": "not-found",
//!   "initial_path": "/",
//!   "routes": [
//!     { "path": "/", "name": "Dashboard", "view": "dashboard" },
//!     { "path": "/video-frames", "name": "VideoFrames", "view": "video-frames" }
//!   ]
//! }
//! ```
//!
//! Views are named by key; the caller maps keys to its own view type. The
//! manifest keeps whatever the document says, gaps included: a `null` in
//! `routes` stays an empty slot and a missing field stays absent, so
//! [`RouteTable::build`] reports them instead of the loader hiding them.
//!
//! ```
//! use media_navigator::config::RouteManifest;
//!
//! let manifest = RouteManifest::from_json(
//!     r#"{ "routes": [{ "path": "/", "name": "Dashboard", "view": "dashboard" }] }"#,
//! )
//! .unwrap();
//! let table = manifest.build_table(|key| Some(key.to_string())).unwrap();
//! assert_eq!(table.lookup("/").unwrap().view(), "dashboard");
//! ```

use crate::debug_log;
use crate::error::ValidationError;
use crate::resolver::RouterOptions;
use crate::route::RouteRecordInput;
use crate::table::RouteTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures loading a manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid manifest JSON.
    #[error("invalid route manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A route names a view the application does not know.
    #[error("route #{index}: unknown view '{key}'")]
    UnknownView { index: usize, key: String },

    /// The `not_found` key names no known view.
    #[error("unknown not-found view '{key}'")]
    UnknownNotFoundView { key: String },

    /// The routes do not form a valid table.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One `routes` entry as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
}

/// A parsed route manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Route entries in order; `None` is an empty slot.
    pub routes: Vec<Option<ManifestEntry>>,
    /// Key of the view shown for unmatched paths.
    #[serde(default)]
    pub not_found: Option<String>,
    /// Path to resolve at startup.
    #[serde(default)]
    pub initial_path: Option<String>,
}

impl RouteManifest {
    /// Parse a manifest document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let manifest: RouteManifest = serde_json::from_str(json)?;
        debug_log!("Parsed route manifest with {} slots", manifest.routes.len());
        Ok(manifest)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Map view keys through `resolve_view`, keeping empty slots and absent
    /// fields for the table to judge.
    pub fn to_inputs<V, F>(
        &self,
        mut resolve_view: F,
    ) -> Result<Vec<Option<RouteRecordInput<V>>>, ConfigError>
    where
        F: FnMut(&str) -> Option<V>,
    {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let Some(entry) = slot else {
                    return Ok(None);
                };
                let view = match entry.view.as_deref() {
                    Some(key) => Some(resolve_view(key).ok_or_else(|| ConfigError::UnknownView {
                        index,
                        key: key.to_string(),
                    })?),
                    None => None,
                };
                Ok(Some(RouteRecordInput {
                    path: entry.path.clone(),
                    name: entry.name.clone(),
                    view,
                }))
            })
            .collect()
    }

    /// Build the route table described by the manifest.
    pub fn build_table<V, F>(&self, resolve_view: F) -> Result<RouteTable<V>, ConfigError>
    where
        F: FnMut(&str) -> Option<V>,
    {
        Ok(RouteTable::build(self.to_inputs(resolve_view)?)?)
    }

    /// Resolver options, falling back to `default_not_found` when the
    /// manifest names no not-found view.
    pub fn options<V, F>(
        &self,
        mut resolve_view: F,
        default_not_found: V,
    ) -> Result<RouterOptions<V>, ConfigError>
    where
        F: FnMut(&str) -> Option<V>,
    {
        let not_found_view = match self.not_found.as_deref() {
            Some(key) => resolve_view(key).ok_or_else(|| ConfigError::UnknownNotFoundView {
                key: key.to_string(),
            })?,
            None => default_not_found,
        };
        Ok(RouterOptions {
            not_found_view,
            initial_path: self.initial_path.clone(),
        })
    }
}
