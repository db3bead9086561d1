//! Command-line interface for centime.

pub mod args;
pub mod commands;
