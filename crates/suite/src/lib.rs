//! # Cosmic Smoke Suite
//!
//! The smoke checks and the runner that executes them in order.

pub mod checks;
pub mod html;
mod runner;

#[cfg(test)]
mod fixtures;

pub use checks::{build_check, SmokeCheck};
pub use html::{Heading, PageSummary};
pub use runner::{RunEvent, SmokeRunner};
