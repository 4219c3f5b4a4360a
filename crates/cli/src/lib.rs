//! Cosmic Smoke CLI library: commands and terminal output

pub mod commands;
pub mod output;
