//! WindowProber service: responsibility and boundaries
//!
//! This module and its submodules answer exactly one question: is the frontmost
//! window of the target application fullscreen right now. They MUST NOT decide
//! anything about padding; that belongs to PaddingMonitor.

mod dry_run;
mod osascript;
mod r#trait;

#[cfg(test)]
pub use self::osascript::OsascriptProber;
pub use self::r#trait::{create_window_prober, WindowProberTrait};
