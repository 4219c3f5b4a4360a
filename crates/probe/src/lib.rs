//! # Cosmic Smoke Probe
//!
//! HTTP transport used by the smoke checks.

mod http_probe;
mod stub;
mod transport;

pub use http_probe::HttpProbe;
pub use stub::{StubReply, StubTransport};
pub use transport::{Method, ProbeResponse, Transport};
