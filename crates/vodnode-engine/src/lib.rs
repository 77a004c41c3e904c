#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod engine;
mod error;

pub mod binder;
pub mod normalize;
pub mod pagination;
pub mod params;
pub mod provider;
pub mod template;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

pub use engine::{
    Dispatcher, EngineConfig, EngineConfigBuilder, EngineConfigBuilderError, ExecutionReport,
    OutputItem, PairedItem, RowOutcome,
};
pub use error::{DispatchError, DispatchResult, RowError, RowStage};
pub use normalize::{EnvelopeExtractor, ItemExtractor};
pub use params::{JsonRows, ParameterSource};
pub use provider::{ApiProvider, ApiRequest, ApiService};
pub use template::OptionalSegments;
pub use vodnode_catalog as catalog;

/// Commonly used items for hosts embedding the engine.
pub mod prelude {
    pub use crate::provider::{ApiProvider, ApiRequest, ApiService};
    pub use crate::{
        Dispatcher, EngineConfig, ExecutionReport, JsonRows, OutputItem, ParameterSource, RowError,
    };
}
