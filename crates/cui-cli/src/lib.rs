//! Library side of the `cui` command-line driver.
//!
//! Each module parses one kind of JSON input and runs it against the
//! matching workspace crate; `main.rs` only handles arguments, logging and
//! output.

pub mod chart;
pub mod datalist;
pub mod history;
pub mod logging;
