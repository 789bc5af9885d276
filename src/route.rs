//! Route records.
//!
//! A [`RouteRecordInput`] is one entry of the static route configuration as
//! the application writes it. Any of its fields may be absent; the
//! [`RouteTable`](crate::RouteTable) decides whether the entry is acceptable.
//! Accepted entries become immutable [`RouteRecord`]s.
//!
//! ```
//! use media_navigator::RouteRecordInput;
//!
//! let input = RouteRecordInput::new("/video-frames", "VideoFrames", "frames-view");
//! assert_eq!(input.path.as_deref(), Some("/video-frames"));
//! ```

/// One entry of a route configuration list, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecordInput<V> {
    /// Root-relative URL path.
    pub path: Option<String>,
    /// Symbolic name for programmatic navigation.
    pub name: Option<String>,
    /// View to display when the path is active.
    pub view: Option<V>,
}

impl<V> RouteRecordInput<V> {
    /// Create a fully populated entry.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: Some(path.into()),
            name: Some(name.into()),
            view: Some(view),
        }
    }

    /// Create an entry with no fields set.
    pub fn empty() -> Self {
        Self {
            path: None,
            name: None,
            view: None,
        }
    }

    /// Set the path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the view.
    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }
}

/// A validated path/name/view binding.
///
/// `path` is stored in canonical form (no single trailing slash, see
/// [`canonical_path`](crate::canonical_path)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord<V> {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) view: V,
}

impl<V> RouteRecord<V> {
    /// Canonical path of the route.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// View bound to the route.
    pub fn view(&self) -> &V {
        &self.view
    }
}
