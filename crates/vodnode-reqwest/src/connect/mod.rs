//! Reqwest client module.
//!
//! Wraps the `reqwest` crate for calls against the video-on-demand API.

mod client;
mod config;

pub use client::{ReqwestClient, TRACING_TARGET};
pub use config::{DEFAULT_TIMEOUT_SECS, ReqwestConfig};
