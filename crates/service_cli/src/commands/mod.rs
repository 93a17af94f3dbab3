//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod curve;
pub mod table;
pub mod tenor;
