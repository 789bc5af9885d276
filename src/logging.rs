//! Logging shim.
//!
//! Every diagnostic line the router emits goes through the macros below,
//! which forward to the [`log`](https://docs.rs/log) crate or to
//! [`tracing`](https://docs.rs/tracing) depending on the enabled feature.
//! Enable at most one of the two. With neither enabled the macros compile to
//! nothing.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Levels used by the router:
//!
//! - `trace_log!` for individual table lookups.
//! - `debug_log!` for queued, resolved and discarded navigation events.
//! - `info_log!` for table construction and committed navigations.
//! - `warn_log!` for unmatched paths and host history failures.
//! - `error_log!` for route tables rejected at startup.
//!
//! ```ignore
//! use media_navigator::{debug_log, warn_log};
//!
//! debug_log!("Resolving '{}'", path);
//! warn_log!("No route registered for '{}'", path);
//! ```

/// Emit a **trace**-level log message.
///
/// Dispatches to `log::trace!` or `tracing::trace!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
///
/// Dispatches to `log::debug!` or `tracing::debug!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level log message.
///
/// Dispatches to `log::info!` or `tracing::info!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
///
/// Dispatches to `log::warn!` or `tracing::warn!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level log message.
///
/// Dispatches to `log::error!` or `tracing::error!` depending on the
/// enabled feature flag. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
