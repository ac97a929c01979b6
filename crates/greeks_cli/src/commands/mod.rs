//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; logs go through `tracing`.

pub mod check;
pub mod evaluate;
pub mod reference;
