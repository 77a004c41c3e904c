//! Reqwest-based API provider for the vodnode dispatch engine.
//!
//! This crate provides [`ReqwestClient`], the HTTP implementation of the
//! engine's `ApiProvider` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use vodnode_engine::{Dispatcher, EngineConfig};
//! use vodnode_reqwest::{ReqwestClient, ReqwestConfig};
//!
//! let config = ReqwestConfig::new("https://api.example.com/v1").with_api_token(token);
//! let service = ReqwestClient::new(config)?.into_service();
//!
//! let dispatcher = Dispatcher::builtin(service, EngineConfig::default());
//! let report = dispatcher.execute(&rows).await;
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connect;
mod error;
mod service;

pub use crate::connect::{DEFAULT_TIMEOUT_SECS, ReqwestClient, ReqwestConfig, TRACING_TARGET};
pub use crate::error::{Error, Result};
