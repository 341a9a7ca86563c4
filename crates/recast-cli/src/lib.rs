//! Batch CSV schema-transformation CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
