//! The `siddur` command-line application.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
