use std::collections::HashMap;

use bevy::prelude::Vec3;
use rs_entity::{ModelDef, ModelPose};
use tracing::debug;

use crate::error::ShadowError;

/// Model pixels per world unit.
pub const PX_PER_UNIT: f32 = 16.0;
/// Smallest extent a bone gets on any axis, in model pixels. Keeps flat parts from collapsing.
pub const MIN_PART_EXTENT_PX: f32 = 0.01;

/// Bone rotation in radians, applied in model space as roll * yaw * pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl EulerAngles {
    pub fn from_array([pitch, yaw, roll]: [f32; 3]) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// One axis-aligned cuboid of the skeleton, in world units relative to the entity origin
/// (+Y is down, like the model it came from).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneDescriptor {
    pub position: Vec3,
    pub rotation: EulerAngles,
    pub size: Vec3,
}

impl BoneDescriptor {
    pub fn new(position: Vec3, rotation: EulerAngles, size: Vec3) -> Self {
        Self {
            position,
            rotation,
            size: size.max(Vec3::splat(MIN_PART_EXTENT_PX / PX_PER_UNIT)),
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

/// Named bones of one posed entity for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSnapshot {
    pub bones: Vec<(&'static str, BoneDescriptor)>,
}

impl ModelSnapshot {
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoneDescriptor> + '_ {
        self.bones.iter().map(|(_, bone)| bone)
    }

    pub fn get(&self, name: &str) -> Option<&BoneDescriptor> {
        self.bones
            .iter()
            .find(|(bone_name, _)| *bone_name == name)
            .map(|(_, bone)| bone)
    }
}

/// Pose-independent part of a bone: which root part it follows and the bounding box of every
/// cube hanging off that part, relative to its pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneTemplate {
    pub part: usize,
    pub name: &'static str,
    pub center_px: Vec3,
    pub size_px: Vec3,
}

/// One template per root part that owns geometry. Child parts are folded into their root.
pub fn bone_templates(model: &ModelDef) -> Vec<BoneTemplate> {
    model
        .root_parts()
        .filter_map(|root| {
            let mut min = Vec3::splat(f32::INFINITY);
            let mut max = Vec3::splat(f32::NEG_INFINITY);

            for (idx, part) in model.parts.iter().enumerate() {
                if model.root_of(idx) != Some(root) {
                    continue;
                }
                let Some(offset) = model.pivot_from_root(idx) else {
                    continue;
                };
                let offset = Vec3::from_array(offset);
                for cube in part.cubes {
                    let (lo, hi) = cube.bounds();
                    min = min.min(offset + Vec3::from_array(lo));
                    max = max.max(offset + Vec3::from_array(hi));
                }
            }

            if !min.is_finite() || !max.is_finite() {
                return None;
            }

            Some(BoneTemplate {
                part: root,
                name: model.parts[root].name,
                center_px: (min + max) * 0.5,
                size_px: (max - min).max(Vec3::splat(MIN_PART_EXTENT_PX)),
            })
        })
        .collect()
}

/// Turns registry models into per-frame skeletons. Templates are built once per model.
#[derive(Debug, Default)]
pub struct BoneDataExtractor {
    templates: HashMap<&'static str, Vec<BoneTemplate>>,
}

impl BoneDataExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn templates(&mut self, model: &ModelDef) -> &[BoneTemplate] {
        self.templates.entry(model.name).or_insert_with(|| {
            let templates = bone_templates(model);
            debug!(
                "built {} bone templates for model {}",
                templates.len(),
                model.name
            );
            templates
        })
    }

    pub fn cached_models(&self) -> usize {
        self.templates.len()
    }

    /// Pose is optional; without one every part sits at its rest rotation.
    pub fn extract(
        &mut self,
        model: &ModelDef,
        pose: Option<&ModelPose>,
    ) -> Result<ModelSnapshot, ShadowError> {
        let templates = self.templates(model);
        if templates.is_empty() {
            return Err(ShadowError::EmptyModel(model.name));
        }

        let bones = templates
            .iter()
            .filter_map(|template| {
                let part = model.parts.get(template.part)?;
                let pose_rotation = pose
                    .map(|pose| pose.rotation(template.part))
                    .unwrap_or_default();
                let rotation = EulerAngles {
                    pitch: part.rotation[0] + pose_rotation[0],
                    yaw: part.rotation[1] + pose_rotation[1],
                    roll: part.rotation[2] + pose_rotation[2],
                };
                let position = (Vec3::from_array(part.pivot) + template.center_px) / PX_PER_UNIT;
                Some((
                    template.name,
                    BoneDescriptor::new(position, rotation, template.size_px / PX_PER_UNIT),
                ))
            })
            .collect();

        Ok(ModelSnapshot { bones })
    }
}

/// Vertical extent of the projected skeleton, never less than zero.
pub fn base_shadow_height(vertices: &[Vec<Vec3>]) -> f32 {
    let (mut min_y, mut max_y) = (0.0f32, 0.0f32);
    for v in vertices.iter().flatten() {
        min_y = min_y.min(v.y);
        max_y = max_y.max(v.y);
    }
    max_y - min_y
}

/// Lowest point of the skeleton (largest y, since model space points down).
pub fn center_bottom_offset(vertices: &[Vec<Vec3>]) -> f32 {
    vertices
        .iter()
        .flatten()
        .fold(0.0f32, |bottom, v| bottom.max(v.y))
}

/// Degrees between the MC yaw convention and `atan2(z, x)` headings.
pub const HEADING_OFFSET_DEG: f32 = 90.0;
/// Squared horizontal speed (blocks/tick) above which the body turns toward its movement.
pub const MOVING_SPEED_SQ: f32 = 1.0e-4;
/// A standing body only turns once the head is this far off to one side.
pub const MAX_HEAD_BODY_GAP_DEG: f32 = 35.0;
pub const BODY_CATCH_UP_RATE: f32 = 0.05;

/// Body heading (degrees, `atan2(z, x)` convention) for entities whose host does not report one.
///
/// Moving bodies swing halfway toward the direction of travel each call; standing bodies stay
/// put until the head turns past [`MAX_HEAD_BODY_GAP_DEG`], then creep toward it.
pub fn estimate_body_yaw(head_yaw_deg: f32, velocity: Vec3, last_body_yaw: Option<f32>) -> f32 {
    let head = head_yaw_deg + HEADING_OFFSET_DEG;
    let body = last_body_yaw.unwrap_or(head);

    let horizontal_sq = velocity.x * velocity.x + velocity.z * velocity.z;
    if horizontal_sq > MOVING_SPEED_SQ {
        let movement = velocity.z.atan2(velocity.x).to_degrees();
        return lerp_degrees(body, movement, 0.5);
    }

    if wrap_degrees(head - body).abs() > MAX_HEAD_BODY_GAP_DEG {
        lerp_degrees(body, head, BODY_CATCH_UP_RATE)
    } else {
        body
    }
}

/// Wraps into `[-180, 180)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Interpolates along the shorter arc.
pub fn lerp_degrees(from: f32, to: f32, t: f32) -> f32 {
    from + wrap_degrees(to - from) * t
}
