use bevy::prelude::*;
use serde::Deserialize;
use std::fmt;

use crate::reorder::AutoScrollPolicy;

const CONFIG_JSON: &str = include_str!("../assets/reorder.json");

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = match ReorderConfig::load() {
            Ok(config) => {
                info!(
                    "Loaded list config: {} items, edge margin {}, scroll step {}",
                    config.item_count, config.edge_margin, config.scroll_step
                );
                config
            }
            Err(e) => {
                warn!("Invalid embedded list config ({}), using defaults", e);
                ReorderConfig::default()
            }
        };
        app.insert_resource(config);
    }
}

/// Tuning for the reorderable list. Missing JSON fields take the defaults.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Number of demo rows
    pub item_count: usize,
    /// Distance from a viewport edge that triggers auto-scroll
    pub edge_margin: f32,
    /// Auto-scroll distance per frame
    pub scroll_step: f32,
    /// Pixels per wheel "line"
    pub wheel_line_height: f32,
    pub row_padding: f32,
    pub handle_font_size: f32,
    pub label_font_size: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            item_count: 200,
            edge_margin: 100.0,
            scroll_step: 20.0,
            wheel_line_height: 24.0,
            row_padding: 16.0,
            handle_font_size: 28.0,
            label_font_size: 22.0,
        }
    }
}

/// Error types for config loading
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config is not valid JSON: {}", e),
            ConfigError::Invalid { field, value } => {
                write!(f, "{} must be finite and non-negative, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl ReorderConfig {
    /// Parse the config embedded at build time
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(CONFIG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ReorderConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("edge_margin", self.edge_margin),
            ("scroll_step", self.scroll_step),
            ("wheel_line_height", self.wheel_line_height),
            ("row_padding", self.row_padding),
            ("handle_font_size", self.handle_font_size),
            ("label_font_size", self.label_font_size),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }

    pub fn auto_scroll(&self) -> AutoScrollPolicy {
        AutoScrollPolicy {
            edge_margin: self.edge_margin,
            scroll_step: self.scroll_step,
        }
    }
}
