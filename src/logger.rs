//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only shows with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("sitemap"; "wrote {}", path.display());
//! log!("warning"; "seo.siteUrl is empty");
//! debug!("config"; "loading {}", path.display());
//! ```

use owo_colors::{AnsiColors, OwoColorize, Stream};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// `error` and `warning` lines go to stderr, everything else to stdout.
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if is_diagnostic(&module_lower) {
        writeln!(stderr().lock(), "{prefix} {message}").ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{prefix} {message}").ok();
        stdout.flush().ok();
    }
}

fn is_diagnostic(module_lower: &str) -> bool {
    matches!(module_lower, "error" | "warning")
}

/// Apply color to a module prefix based on module type.
///
/// Honors `--color` and TTY detection for the stream the line goes to.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let color = match module_lower {
        "error" => AnsiColors::BrightRed,
        "warning" => AnsiColors::BrightMagenta,
        "inject" => AnsiColors::BrightBlue,
        "done" => AnsiColors::BrightGreen,
        _ => AnsiColors::BrightYellow,
    };
    let stream = if is_diagnostic(module_lower) {
        Stream::Stderr
    } else {
        Stream::Stdout
    };
    prefix
        .if_supports_color(stream, |p| p.color(color).bold().to_string())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("Sitemap", "sitemap"), "[Sitemap]");
        assert_eq!(colorize_prefix("error", "error"), "[error]");
        assert_eq!(colorize_prefix("warning", "warning"), "[warning]");
    }

    #[test]
    fn test_diagnostic_modules() {
        assert!(is_diagnostic("error"));
        assert!(is_diagnostic("warning"));
        assert!(!is_diagnostic("feed"));
    }
}
