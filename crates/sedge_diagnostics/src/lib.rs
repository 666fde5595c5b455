//! Structured diagnostics for the sedge DEF toolchain.
//!
//! Diagnostics carry a severity, a coded identifier, and a message. They are
//! accumulated in a thread-safe [`DiagnosticSink`] and rendered on demand;
//! no component writes directly to stdout or stderr. The design database
//! uses this crate to surface non-fatal callback reminders without aborting
//! ingestion.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
