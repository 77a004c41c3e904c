//! Engine configuration.

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use vodnode_catalog::LimitOptions;

use crate::pagination::PageLimits;
use crate::template::OptionalSegments;

/// Configuration for the dispatch engine.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct EngineConfig {
    /// Items requested per page by the fetch-all loops
    #[cfg_attr(
        feature = "config",
        arg(long = "page-size", env = "PAGE_SIZE", default_value = "50")
    )]
    #[builder(default = "50")]
    pub page_size: u32,

    /// Limit used when a paginated read sets none
    #[cfg_attr(
        feature = "config",
        arg(long = "default-limit", env = "DEFAULT_LIMIT", default_value = "50")
    )]
    #[builder(default = "50")]
    pub default_limit: u32,

    /// Upper bound for the per-row limit
    #[cfg_attr(
        feature = "config",
        arg(long = "max-limit", env = "MAX_LIMIT", default_value = "100")
    )]
    #[builder(default = "100")]
    pub max_limit: u32,

    /// Consecutive full pages after which a fetch-all loop fails
    #[cfg_attr(
        feature = "config",
        arg(long = "max-pages", env = "MAX_PAGES", default_value = "1000")
    )]
    #[builder(default = "1000")]
    pub max_pages: u32,

    /// Handling of optional URL segments without a value
    #[cfg_attr(
        feature = "config",
        arg(
            long = "optional-segments",
            env = "OPTIONAL_SEGMENTS",
            value_enum,
            default_value_t = OptionalSegments::Require
        )
    )]
    #[builder(default)]
    pub optional_segments: OptionalSegments,
}

impl EngineConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == Some(0) {
            return Err("page_size must be at least 1".into());
        }
        if self.max_pages == Some(0) {
            return Err("max_pages must be at least 1".into());
        }

        let default_limit = self.default_limit.unwrap_or(50);
        let max_limit = self.max_limit.unwrap_or(100);
        check_limits(default_limit, max_limit)
    }
}

impl EngineConfig {
    /// Creates a builder with every default filled in.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Checks a configuration that did not go through the builder.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated bound.
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size must be at least 1".into());
        }
        if self.max_pages == 0 {
            return Err("max_pages must be at least 1".into());
        }
        check_limits(self.default_limit, self.max_limit)
    }

    /// Clamps a requested limit into `1..=max_limit`.
    pub fn clamp_limit(&self, limit: u64) -> u32 {
        let max = u64::from(self.max_limit.max(1));
        // Bounded by max_limit, which is a u32.
        limit.clamp(1, max) as u32
    }

    /// Loop bounds for the fetch-all strategies.
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            page_size: self.page_size,
            max_pages: self.max_pages,
        }
    }

    /// Limit bounds advertised in the parameter schema.
    pub fn limit_options(&self) -> LimitOptions {
        LimitOptions {
            default: self.default_limit,
            max: self.max_limit,
        }
    }
}

fn check_limits(default_limit: u32, max_limit: u32) -> Result<(), String> {
    if default_limit == 0 {
        return Err("default_limit must be at least 1".into());
    }
    if default_limit > max_limit {
        return Err(format!(
            "default_limit ({default_limit}) must not exceed max_limit ({max_limit})"
        ));
    }
    Ok(())
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            default_limit: 50,
            max_limit: 100,
            max_pages: 1000,
            optional_segments: OptionalSegments::Require,
        }
    }
}
