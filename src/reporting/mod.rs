//! Output reporters: terminal (decorated, for copy-paste) and JSON (machine).
//!
//! Both implement the [`Reporter`](crate::models::Reporter) trait and read
//! the section files themselves, in manifest order.

pub mod json;
pub mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;
