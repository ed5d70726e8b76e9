use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ShadowError;

/// How a shadow's length reacts to the height of its light source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ShadowSizing {
    /// Projection as-is.
    #[default]
    Fixed,
    /// Lengthen toward the horizon, shrink toward `overhead_length` (world units) when the
    /// light is straight above.
    Elevation {
        horizon_stretch: f32,
        overhead_length: f32,
    },
}

impl ShadowSizing {
    pub const ELEVATION: Self = Self::Elevation {
        horizon_stretch: 1.5,
        overhead_length: 0.4,
    };
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    /// Ticks between rescans of nearby light emitters.
    pub update_interval_ticks: u64,
    /// Half-size, in blocks, of the cube scanned for emitters.
    pub source_block_radius: i32,
    pub base_opacity: f32,
    /// Opacity lost per open block directly under the entity.
    pub air_gap_penalty: f32,
    pub max_air_gap_blocks: u32,
    /// Merge distance for projected points, also the minimum distance from the axes.
    pub vertex_epsilon: f32,
    /// Triangles thinner than this (area) mark their middle vertex as colinear.
    pub colinear_epsilon: f32,
    /// Height above the entity's feet at which shadows are drawn.
    pub ground_lift: f32,
    pub sizing: ShadowSizing,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            update_interval_ticks: 20,
            source_block_radius: 14,
            base_opacity: 0.8,
            air_gap_penalty: 0.1,
            max_air_gap_blocks: 8,
            vertex_epsilon: 1.0e-2,
            colinear_epsilon: 1.0e-4,
            ground_lift: 0.01,
            sizing: ShadowSizing::Fixed,
        }
    }
}

impl ShadowSettings {
    pub fn from_toml_str(raw: &str) -> Result<Self, ShadowError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShadowError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ShadowError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
