//! Command-line configuration for the `monkey` binary.

pub mod config;
