//! # Cosmic Smoke Shared
//!
//! Common types used across all cosmic-smoke packages.

pub mod check;
pub mod config;
pub mod error;
pub mod shape;

// Re-exports
pub use check::*;
pub use config::*;
pub use error::*;
pub use shape::*;
