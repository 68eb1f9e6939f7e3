//! UI Widgets
//!
//! Modal dialog, loading indicator and date formatting shared by every
//! page.

pub mod date;
pub mod loader;
pub mod modal;

pub use date::{format_date, parse_date, DateParseError, INVALID_DATE};
pub use loader::{hide_loader, show_loader, LOADER_CLASS};
pub use modal::{close_modal, show_modal, CLOSE_CLASS, OVERLAY_CLASS};
