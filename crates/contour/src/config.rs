//! Configuration for contour extraction.

use serde::{Deserialize, Serialize};
use topo_common::{TopoError, TopoResult};

use crate::pairing::SaddleResolution;

/// Settings for a single extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourConfig {
    /// Elevation step between drawn contours. Must be positive.
    #[serde(alias = "contour_interval")]
    pub interval: i32,

    /// Shift applied to elevations before testing them against the interval.
    #[serde(alias = "contour_offset")]
    pub offset: i32,

    /// How to join the four crossings of a saddle cell.
    #[serde(alias = "saddle_mode")]
    pub saddle: SaddleResolution,

    /// Process grid rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            interval: 1,
            offset: 0,
            saddle: SaddleResolution::VisitOrder,
            parallel: false,
        }
    }
}

impl ContourConfig {
    pub fn new(interval: i32, offset: i32) -> Self {
        Self {
            interval,
            offset,
            ..Self::default()
        }
    }

    pub fn with_saddle(mut self, saddle: SaddleResolution) -> Self {
        self.saddle = saddle;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup over the defaults. Values that do
    /// not parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("CONTOUR_INTERVAL") {
            if let Ok(interval) = val.trim().parse() {
                config.interval = interval;
            }
        }

        if let Some(val) = lookup("CONTOUR_OFFSET") {
            if let Ok(offset) = val.trim().parse() {
                config.offset = offset;
            }
        }

        if let Some(val) = lookup("CONTOUR_SADDLE_MODE") {
            if let Some(saddle) = SaddleResolution::from_str(&val) {
                config.saddle = saddle;
            }
        }

        if let Some(val) = lookup("CONTOUR_PARALLEL") {
            let val = val.trim();
            config.parallel = val.eq_ignore_ascii_case("true") || val == "1";
        }

        config
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> TopoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> TopoResult<()> {
        if self.interval <= 0 {
            return Err(TopoError::configuration(format!(
                "contour interval must be > 0, got {}",
                self.interval
            )));
        }
        Ok(())
    }
}
