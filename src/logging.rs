//! Logging abstraction layer.
//!
//! The matcher emits diagnostics through a small set of macros that forward
//! to either the [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) crate, chosen by feature flag. The
//! two features are **mutually exclusive**; enable at most one. With neither
//! enabled the arguments are still type-checked but nothing is emitted.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! What gets logged where:
//!
//! - `trace_log!`: per-component extraction attempts and cache lookups.
//! - `debug_log!`: pattern compilation and candidate URLs that fail to parse.
//! - `warn_log!`: patterns rejected as invalid.
//!
//! ```ignore
//! use url_template_matcher::{debug_log, trace_log, warn_log};
//!
//! trace_log!("Extracting {} from '{}'", component, value);
//! debug_log!("Compiled {} sub-templates for '{}'", count, pattern);
//! warn_log!("Invalid URL pattern '{}': {}", pattern, reason);
//! ```

/// Emit a **trace**-level log message.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        {
            let _ = format_args!($($arg)*);
        }
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
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}

/// Emit a **warn**-level log message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        {
            let _ = format_args!($($arg)*);
        }
    };
}
