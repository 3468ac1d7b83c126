#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! This crate provides the `catalog_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is tagged
//! with the item currently being catalogued on the calling thread.

use std::cell::RefCell;

thread_local! {
    /// Name of the item whose photos are being captured on this thread.
    static ACTIVE_ITEM: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Sets the item name used to tag log lines emitted from the current thread.
/// The app calls this whenever the item name changes.
pub fn set_active_item(item: &str) {
    ACTIVE_ITEM.with(|v| {
        let mut current = v.borrow_mut();
        current.clear();
        current.push_str(item.trim());
    });
}

/// Returns the tag for the current thread, `-` when no item is set.
pub fn active_item() -> String {
    ACTIVE_ITEM.with(|v| {
        let current = v.borrow();
        if current.is_empty() {
            "-".to_string()
        } else {
            current.clone()
        }
    })
}

/// Logs a trace-level message tagged with the active item.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}] {}", $crate::active_item(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the active item.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        log::info!("[{}] {}", $crate::active_item(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the active item.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}] {}", $crate::active_item(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the active item.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        log::warn!("[{}] {}", $crate::active_item(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the active item.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        log::error!("[{}] {}", $crate::active_item(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have set the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
