//! Workflow module
//!
//! This module runs one invocation of the assistant from start to finish.

pub mod engine;

pub use engine::{RunOptions, RunOutcome, run};
