//! notetable CLI library.
//!
//! Command implementations behind the `notetable` binary.

pub mod commands;
pub mod config;
