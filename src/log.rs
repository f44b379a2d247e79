//! Utilities for logging messages from the library.
//!
//! Messages go to stderr, so they don't mix with the results that programs print.

use once_cell::sync::Lazy;

#[macro_export]
macro_rules! svgsize_log {
    (
        $($arg:tt)+
    ) => {
        if $crate::log::log_enabled() {
            eprintln!("{}", format_args!($($arg)+));
        }
    };
}

/// Whether the `SVGSIZE_LOG` environment variable was set when logging was first used.
pub fn log_enabled() -> bool {
    static ENABLED: Lazy<bool> = Lazy::new(|| ::std::env::var_os("SVGSIZE_LOG").is_some());

    *ENABLED
}
