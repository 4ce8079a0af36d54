//! Main application modules.
//!
//! This module provides the console progress display and statistics printing
//! used by the main application.

pub mod console;
pub mod statistics;

// Re-export public API
pub use console::{
    print_statistics_table, render_statistics_table, truncate_for_display, ConsoleObserver,
};
pub use statistics::print_query_statistics;
