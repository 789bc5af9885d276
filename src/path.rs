//! Path canonicalization shared by the table and the resolver.
//!
//! Lookup is exact and case-sensitive. The one allowance is a single trailing
//! slash: `/video-frames` and `/video-frames/` name the same route. The root
//! path `/` is already canonical.
//!
//! | Input               | Canonical           |
//! |---------------------|---------------------|
//! | `/video-frames`     | `/video-frames`     |
//! | `/video-frames/`    | `/video-frames`     |
//! | `/video-frames//`   | `/video-frames/`    |
//! | `/`                 | `/`                 |
//! | `/Video-Frames`     | `/Video-Frames`     |

/// Strip one trailing slash, leaving the root path untouched.
///
/// # Examples
///
/// ```
/// use media_navigator::canonical_path;
///
/// assert_eq!(canonical_path("/read-metadata/"), "/read-metadata");
/// assert_eq!(canonical_path("/read-metadata"), "/read-metadata");
/// assert_eq!(canonical_path("/"), "/");
/// ```
#[inline]
#[must_use]
pub fn canonical_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Check whether a path is root-relative.
#[inline]
pub fn is_root_relative(path: &str) -> bool {
    path.starts_with('/')
}
