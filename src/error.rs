//! Error and outcome types for the router.
//!
//! - [`ValidationError`]: a route list was rejected while building the
//!   [`RouteTable`](crate::RouteTable). Fatal at startup.
//! - [`NavigationError`]: a navigation could not be applied as requested.
//! - [`NavigationResult`]: the outcome of one processed navigation event
//!   (`Active`, `NotFound`, `Discarded`, `Error`).
//!
//! # Examples
//!
//! ```
//! use media_navigator::NavigationResult;
//!
//! let result = NavigationResult::Active { path: "/video-frames".into() };
//! assert!(result.is_active());
//!
//! let missing = NavigationResult::NotFound { path: "/nope".into() };
//! assert_eq!(missing.path(), Some("/nope"));
//! ```

use thiserror::Error;

// ============================================================================
// Validation
// ============================================================================

/// Field of a route record named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    /// The `path` field.
    Path,
    /// The `name` field.
    Name,
    /// The `view` field.
    View,
}

impl std::fmt::Display for RouteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = match self {
            RouteField::Path => "path",
            RouteField::Name => "name",
            RouteField::View => "view",
        };
        f.write_str(field)
    }
}

/// A route list that cannot become a [`RouteTable`](crate::RouteTable).
///
/// Every variant carries the zero-based index of the offending record in the
/// input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An empty slot where a record was expected.
    #[error("route #{index}: missing record")]
    MissingRecord { index: usize },

    /// A record without a required field, or with the field left empty.
    #[error("route #{index}: missing {field}")]
    MissingField { index: usize, field: RouteField },

    /// A path that is not root-relative.
    #[error("route #{index}: path '{path}' must start with '/'")]
    InvalidPath { index: usize, path: String },

    /// Two records bind the same path.
    #[error("route #{index}: path '{path}' already registered by route #{first}")]
    DuplicatePath {
        index: usize,
        first: usize,
        path: String,
    },

    /// Two records share a name.
    #[error("route #{index}: name '{name}' already registered by route #{first}")]
    DuplicateName {
        index: usize,
        first: usize,
        name: String,
    },
}

impl ValidationError {
    /// Index of the rejected record in the input sequence.
    pub fn index(&self) -> usize {
        match self {
            ValidationError::MissingRecord { index }
            | ValidationError::MissingField { index, .. }
            | ValidationError::InvalidPath { index, .. }
            | ValidationError::DuplicatePath { index, .. }
            | ValidationError::DuplicateName { index, .. } => *index,
        }
    }

    /// Field that failed validation, if the error concerns a single field.
    pub fn field(&self) -> Option<RouteField> {
        match self {
            ValidationError::MissingRecord { .. } => None,
            ValidationError::MissingField { field, .. } => Some(*field),
            ValidationError::InvalidPath { .. } | ValidationError::DuplicatePath { .. } => {
                Some(RouteField::Path)
            }
            ValidationError::DuplicateName { .. } => Some(RouteField::Name),
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Detailed navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route is registered for the path. The resolver shows the not-found
    /// view instead.
    #[error("route not found: {path}")]
    NotFound { path: String },

    /// Programmatic navigation used a name that no route carries.
    #[error("no route named '{name}'")]
    UnknownRouteName { name: String },

    /// The host history refused an entry.
    #[error("history host rejected '{path}': {message}")]
    Host { path: String, message: String },
}

/// Outcome of one processed navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// A registered route is now displayed.
    Active { path: String },
    /// No route matched; the not-found view is displayed.
    NotFound { path: String },
    /// A newer navigation superseded this one before it was committed.
    Discarded { path: String },
    /// The navigation could not be applied as requested.
    Error(NavigationError),
}

impl NavigationResult {
    /// Check if a registered route became active
    pub fn is_active(&self) -> bool {
        matches!(self, NavigationResult::Active { .. })
    }

    /// Check if the path had no route
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationResult::NotFound { .. })
    }

    /// Check if the navigation was superseded
    pub fn is_discarded(&self) -> bool {
        matches!(self, NavigationResult::Discarded { .. })
    }

    /// Check if there was an error
    pub fn is_error(&self) -> bool {
        matches!(self, NavigationResult::Error(_))
    }

    /// Path the navigation targeted, when one is known.
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationResult::Active { path }
            | NavigationResult::NotFound { path }
            | NavigationResult::Discarded { path } => Some(path),
            NavigationResult::Error(NavigationError::NotFound { path })
            | NavigationResult::Error(NavigationError::Host { path, .. }) => Some(path),
            NavigationResult::Error(NavigationError::UnknownRouteName { .. }) => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_result_active() {
        let result = NavigationResult::Active {
            path: "/".to_string(),
        };
        assert!(result.is_active());
        assert!(!result.is_not_found());
        assert!(!result.is_discarded());
        assert!(!result.is_error());
    }

    #[test]
    fn test_navigation_result_unknown_name_has_no_path() {
        let result = NavigationResult::Error(NavigationError::UnknownRouteName {
            name: "Missing".to_string(),
        });
        assert!(result.is_error());
        assert_eq!(result.path(), None);
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::DuplicatePath {
            index: 5,
            first: 4,
            path: "/video-geotagger".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "route #5: path '/video-geotagger' already registered by route #4"
        );
        assert_eq!(error.index(), 5);
        assert_eq!(error.field(), Some(RouteField::Path));
    }

    #[test]
    fn test_missing_record_has_no_field() {
        let error = ValidationError::MissingRecord { index: 2 };
        assert_eq!(error.to_string(), "route #2: missing record");
        assert_eq!(error.field(), None);
    }

    #[test]
    fn test_missing_field_display() {
        let error = ValidationError::MissingField {
            index: 0,
            field: RouteField::View,
        };
        assert_eq!(error.to_string(), "route #0: missing view");
    }
}
