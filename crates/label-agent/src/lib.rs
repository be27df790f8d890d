//! Command implementations behind the `label-agent` binary

pub mod commands;
