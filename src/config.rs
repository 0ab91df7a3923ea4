//! Tunables of the canvas editor.
//!
//! Every field has a default, so a config file only needs to list the values
//! it overrides:
//!
//! ```json
//! { "grid_size": 25.0, "snap_to_grid": false }
//! ```

use crate::error::ConfigError;
use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Inclusive zoom range plus the step applied per zoom action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ZoomBounds {
    /// Clamps `scale` into `[min, max]`. Inverted bounds resolve to `max`
    /// instead of panicking.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.min) || !positive(self.max) || !positive(self.step) {
            return Err(ConfigError::Invalid {
                field,
                reason: format!(
                    "min, max and step must be finite and positive (got {}, {}, {})",
                    self.min, self.max, self.step
                ),
            });
        }
        if self.min > self.max {
            return Err(ConfigError::Invalid {
                field,
                reason: format!("min {} exceeds max {}", self.min, self.max),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_size: f64,
    pub snap_to_grid: bool,
    pub show_grid: bool,
    /// Bounds used by Ctrl + scroll wheel.
    pub wheel_zoom: ZoomBounds,
    /// Bounds used by the zoom buttons.
    pub button_zoom: ZoomBounds,
    pub node_size: Size,
    pub header_height: f64,
    /// Vertical offset of the first port below the card's top edge.
    pub port_offset: f64,
    pub port_spacing: f64,
    pub port_hit_radius: f64,
    /// Distance under which a dropped node counts as overlapping an existing one.
    pub overlap_distance: f64,
    /// Offset applied on both axes to a drop that overlaps an existing node.
    pub nudge: f64,
    pub duplicate_offset: f64,
    /// Per-agent offset when several agents are dropped at once.
    pub batch_spacing: f64,
    pub progress_tick_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            snap_to_grid: true,
            show_grid: true,
            wheel_zoom: ZoomBounds {
                min: 0.1,
                max: 2.0,
                step: 0.1,
            },
            button_zoom: ZoomBounds {
                min: 0.5,
                max: 2.0,
                step: 0.1,
            },
            node_size: Size::new(220.0, 100.0),
            header_height: 40.0,
            port_offset: 30.0,
            port_spacing: 20.0,
            port_hit_radius: 8.0,
            overlap_distance: 50.0,
            nudge: 50.0,
            duplicate_offset: 50.0,
            batch_spacing: 50.0,
            progress_tick_ms: 100,
        }
    }
}

impl EditorConfig {
    /// Loads a config from a JSON file, defaulting every missing field.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the canvas cannot work with: zoom bounds that are not
    /// positive or are inverted, a non-finite grid size and a zero tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wheel_zoom.validate("wheel_zoom")?;
        self.button_zoom.validate("button_zoom")?;
        if !self.grid_size.is_finite() {
            return Err(ConfigError::Invalid {
                field: "grid_size",
                reason: format!("must be finite (got {})", self.grid_size),
            });
        }
        if self.progress_tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "progress_tick_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }
}
