//! What the shadow pipeline needs from the game around it, and what it hands back.

use std::collections::HashMap;

use bevy::prelude::{IVec3, Vec3};
use rs_entity::ModelPose;
use rs_utils::{NetEntityKind, block_pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub i32);

/// Read-only view of the world around shadowed entities.
pub trait ShadowWorld {
    /// Monotonic game time, in ticks.
    fn game_time(&self) -> u64;

    /// Sky angle in `[0, 1)`: 0 is noon, 0.5 is midnight.
    fn celestial_phase(&self) -> f32;

    /// Combined block and sky light at `pos`, 0..=15.
    fn light_level(&self, pos: IVec3) -> u8;

    /// True when a shadow would fall through the block at `pos` (air and the like).
    fn is_block_open(&self, pos: IVec3) -> bool;

    /// Light emitted by the block at `pos`, 0..=15.
    fn block_luminance(&self, pos: IVec3) -> u8;

    fn is_line_of_sight_clear(&self, from: Vec3, to: Vec3) -> bool;

    /// Every emitting block in the cube of `radius` around `center`, with its luminance.
    /// Hosts with an emitter index should override the brute-force scan.
    fn light_emitters_near(&self, center: IVec3, radius: i32) -> Vec<(IVec3, u8)> {
        let mut emitters = Vec::new();
        for x in -radius..=radius {
            for y in -radius..=radius {
                for z in -radius..=radius {
                    let pos = center + IVec3::new(x, y, z);
                    let luminance = self.block_luminance(pos);
                    if luminance > 0 {
                        emitters.push((pos, luminance));
                    }
                }
            }
        }
        emitters
    }
}

/// Average alpha (0..=1) of entity textures, keyed by texture path.
pub trait TextureAlphaSource {
    /// `None` when the texture can't be read.
    fn average_alpha(&self, texture: &str) -> Option<f32>;
}

impl TextureAlphaSource for HashMap<String, f32> {
    fn average_alpha(&self, texture: &str) -> Option<f32> {
        self.get(texture).copied()
    }
}

/// Everything the pipeline reads about one entity for one frame.
#[derive(Debug, Clone)]
pub struct EntitySnapshot<'a> {
    pub id: EntityId,
    pub kind: NetEntityKind,
    /// Feet position.
    pub position: Vec3,
    /// Blocks per tick.
    pub velocity: Vec3,
    /// Head yaw, degrees (0 faces +Z).
    pub yaw: f32,
    /// Body yaw in the same convention, if the host tracks it.
    pub body_yaw: Option<f32>,
    pub eye_height: f32,
    pub pose: Option<&'a ModelPose>,
    /// Overrides the registry's default texture.
    pub texture: Option<&'a str>,
}

impl<'a> EntitySnapshot<'a> {
    pub const DEFAULT_EYE_HEIGHT: f32 = 1.62;

    pub fn new(id: EntityId, kind: NetEntityKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            body_yaw: None,
            eye_height: Self::DEFAULT_EYE_HEIGHT,
            pose: None,
            texture: None,
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.eye_height
    }

    pub fn feet_block(&self) -> IVec3 {
        block_pos(self.position)
    }
}

/// A finished shadow: triangles relative to `origin`, all drawn in black at `opacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowDraw {
    pub entity: EntityId,
    pub origin: Vec3,
    pub triangles: Vec<[Vec3; 3]>,
    pub opacity: f32,
}

impl ShadowDraw {
    pub fn world_triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles
            .iter()
            .map(|tri| tri.map(|v| v + self.origin))
    }
}

/// Renderer side of the pipeline. Expected to draw with [`SHADOW_PASS`].
pub trait ShadowSink {
    fn draw_shadow(&mut self, draw: ShadowDraw);
}

impl ShadowSink for Vec<ShadowDraw> {
    fn draw_shadow(&mut self, draw: ShadowDraw) {
        self.push(draw);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Opaque,
    Translucent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthCompare {
    LessEqual,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowPassState {
    pub blend: BlendMode,
    pub depth_write: bool,
    pub depth_compare: DepthCompare,
    pub cull_faces: bool,
}

/// Shadows are flat translucent overlays: no depth writes, no depth rejection, both faces.
pub const SHADOW_PASS: ShadowPassState = ShadowPassState {
    blend: BlendMode::Translucent,
    depth_write: false,
    depth_compare: DepthCompare::Always,
    cull_faces: false,
};

pub const SHADOW_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
