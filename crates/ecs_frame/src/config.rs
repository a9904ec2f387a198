//! Frame loop configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FrameError;

/// Configuration for the frame loop.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Target frames per second.
    pub frame_rate: f64,
    /// Maximum number of frames to run (0 = unlimited).
    pub max_frames: u64,
    /// Sweep destroyed entities at the end of every frame. When `false` the
    /// owner of the loop is responsible for calling `Store::sweep`.
    pub sweep_each_frame: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            max_frames: 0,
            sweep_each_frame: true,
        }
    }
}

impl FrameConfig {
    /// Parse and validate a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Parse`] for malformed JSON or unknown keys, and
    /// [`FrameError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, FrameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`FrameConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FrameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FrameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Override the frame rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Override the frame limit.
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Check that the config can drive a loop.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfig`] if `frame_rate` is not a
    /// positive finite number, or is so low that one frame does not fit in
    /// a [`Duration`].
    pub fn validate(&self) -> Result<(), FrameError> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(FrameError::InvalidConfig(format!(
                "frame_rate must be a positive number, got {}",
                self.frame_rate
            )));
        }
        self.frame_duration().map(|_| ())
    }

    /// Duration of one frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfig`] if `1 / frame_rate` seconds is
    /// not representable as a [`Duration`].
    pub fn frame_duration(&self) -> Result<Duration, FrameError> {
        Duration::try_from_secs_f64(self.frame_seconds()).map_err(|err| {
            FrameError::InvalidConfig(format!(
                "frame_rate {} gives an unusable frame length: {err}",
                self.frame_rate
            ))
        })
    }

    /// Duration of one frame in seconds.
    #[must_use]
    pub fn frame_seconds(&self) -> f64 {
        1.0 / self.frame_rate
    }
}
