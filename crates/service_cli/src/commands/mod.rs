//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod charts;
pub mod check;
pub mod price;
