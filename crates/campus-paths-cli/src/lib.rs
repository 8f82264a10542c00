//! Campus paths CLI library.
//!
//! Output rendering for the `campus-paths` binary and the line-oriented graph
//! script interpreter behind `campus-paths script`.

#![deny(warnings)]

pub mod output;
pub mod script;

pub use output::OutputFormat;
pub use script::{ScriptError, ScriptRunner};
