//! The validated route table.
//!
//! [`RouteTable::build`] is the only way to obtain a table. It walks the
//! configured entries in order and rejects the whole list on the first
//! problem: an empty slot, a missing field, a path that is not root-relative,
//! or a path or name that an earlier entry already claimed. Nothing is
//! skipped and nothing is overwritten.
//!
//! Once built, the table never changes. Lookups are exact and case-sensitive
//! after [`canonical_path`] trims a single trailing slash.
//!
//! # Examples
//!
//! ```
//! use media_navigator::{RouteRecordInput, RouteTable};
//!
//! let table = RouteTable::from_records([
//!     RouteRecordInput::new("/", "Dashboard", "dashboard"),
//!     RouteRecordInput::new("/video-frames", "VideoFrames", "frames"),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.lookup("/video-frames/").unwrap().name(), "VideoFrames");
//! assert!(table.lookup("/video-geotagger").is_none());
//! ```

use crate::error::{RouteField, ValidationError};
use crate::path::{canonical_path, is_root_relative};
use crate::route::{RouteRecord, RouteRecordInput};
use crate::{error_log, info_log, trace_log};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable, validated collection of route records in insertion order.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Arc<RouteRecord<V>>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Validate a route list and build the table.
    ///
    /// A `None` item is an empty slot in the configuration and is an error,
    /// the same as a record with a missing field.
    pub fn build<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Option<RouteRecordInput<V>>>,
    {
        let result = Self::validate(records);
        match &result {
            Ok(table) => {
                info_log!("Route table built with {} routes", table.len());
            }
            Err(err) => {
                error_log!("Route table rejected: {}", err);
            }
        }
        result
    }

    /// Build from a list without gaps.
    pub fn from_records<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = RouteRecordInput<V>>,
    {
        Self::build(records.into_iter().map(Some))
    }

    fn validate<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Option<RouteRecordInput<V>>>,
    {
        let mut routes = Vec::new();
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();

        for (index, slot) in records.into_iter().enumerate() {
            let input = slot.ok_or(ValidationError::MissingRecord { index })?;

            let path = match input.path {
                Some(path) if !path.is_empty() => path,
                _ => {
                    return Err(ValidationError::MissingField {
                        index,
                        field: RouteField::Path,
                    })
                }
            };
            if !is_root_relative(&path) {
                return Err(ValidationError::InvalidPath { index, path });
            }
            let name = match input.name {
                Some(name) if !name.is_empty() => name,
                _ => {
                    return Err(ValidationError::MissingField {
                        index,
                        field: RouteField::Name,
                    })
                }
            };
            let view = input.view.ok_or(ValidationError::MissingField {
                index,
                field: RouteField::View,
            })?;

            let path = canonical_path(&path).to_string();
            if let Some(&first) = by_path.get(&path) {
                return Err(ValidationError::DuplicatePath { index, first, path });
            }
            if let Some(&first) = by_name.get(&name) {
                return Err(ValidationError::DuplicateName { index, first, name });
            }

            by_path.insert(path.clone(), index);
            by_name.insert(name.clone(), index);
            routes.push(Arc::new(RouteRecord { path, name, view }));
        }

        Ok(Self {
            routes,
            by_path,
            by_name,
        })
    }

    /// Find the route bound to a path.
    pub fn lookup(&self, path: &str) -> Option<&Arc<RouteRecord<V>>> {
        let found = self
            .by_path
            .get(canonical_path(path))
            .map(|&index| &self.routes[index]);
        trace_log!("Lookup '{}' → {}", path, found.map_or("none", |r| r.name()));
        found
    }

    /// Find the route carrying a name.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Arc<RouteRecord<V>>> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RouteRecord<V>>> {
        self.routes.iter()
    }

    /// Canonical paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path())
    }

    /// Route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name())
    }
}

impl<'a, V> IntoIterator for &'a RouteTable<V> {
    type Item = &'a Arc<RouteRecord<V>>;
    type IntoIter = std::slice::Iter<'a, Arc<RouteRecord<V>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
