use bevy::prelude::{Quat, Vec2, Vec3};

use super::bones::ModelSnapshot;
use super::polygon::{
    Triangle, convex_hull, ear_clip_polygon, is_clockwise, remove_colinear_points,
    remove_near_duplicates,
};
use crate::settings::ShadowSizing;

/// Cuboid corners as signs of the half extents.
const CORNER_SIGNS: [Vec3; 8] = [
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
];

/// Lower bound on the squish multiplier so a shadow never degenerates into a line.
const MIN_SIZE_MULTIPLIER: f32 = 0.05;

/// A convex, counter-clockwise shadow outline on the ground plane. Always has 3+ vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowPolygon(Vec<Vec2>);

impl ShadowPolygon {
    pub fn new(points: Vec<Vec2>) -> Option<Self> {
        (points.len() >= 3).then_some(Self(points))
    }

    pub fn points(&self) -> &[Vec2] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn triangulate(&self) -> Vec<Triangle> {
        ear_clip_polygon(&self.0)
    }

    fn map_points(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self(self.0.iter().map(|p| f(*p)).collect())
    }
}

/// Eight corners per bone, rotated by the bone and then by the body heading.
///
/// Bones turn about the top of their cuboid (the joint end in model space), and the whole
/// skeleton turns about the entity origin by `-body_yaw_deg`.
pub fn get_vertices(snapshot: &ModelSnapshot, body_yaw_deg: f32) -> Vec<Vec<Vec3>> {
    let heading = Quat::from_rotation_y((-body_yaw_deg).to_radians());
    snapshot
        .iter()
        .map(|bone| {
            let half = bone.half_extents();
            let rotation = Quat::from_rotation_z(bone.rotation.roll)
                * Quat::from_rotation_y(bone.rotation.yaw)
                * Quat::from_rotation_x(bone.rotation.pitch);
            let pivot = bone.position - Vec3::Y * half.y;
            CORNER_SIGNS
                .iter()
                .map(|sign| {
                    let corner = bone.position + *sign * half;
                    heading * (rotation * (corner - pivot) + pivot)
                })
                .collect()
        })
        .collect()
}

/// Projects every bone onto the plane facing a light at `source_angle_deg` around the vertical.
///
/// Projected x values that land within `epsilon` of zero are pushed out to `±epsilon` so the
/// later rotation never stacks points on the axis. A zero angle keeps the model's own x.
pub fn flatten_vertices(
    vertices: &[Vec<Vec3>],
    source_angle_deg: f32,
    epsilon: f32,
) -> Vec<Vec<Vec2>> {
    let (sin, cos) = source_angle_deg.to_radians().sin_cos();
    vertices
        .iter()
        .map(|bone| {
            bone.iter()
                .map(|v| {
                    if source_angle_deg == 0.0 {
                        return Vec2::new(v.x, v.y);
                    }
                    let x = v.x * cos - v.z * sin;
                    Vec2::new(clamp_away_from_zero(x, epsilon), v.y)
                })
                .collect()
        })
        .collect()
}

/// Per bone: dedupe, hull, drop colinear points. Anything left with fewer than three points
/// is discarded; survivors wind counter-clockwise.
pub fn prune_vertices(
    flattened: &[Vec<Vec2>],
    vertex_epsilon: f32,
    colinear_epsilon: f32,
) -> Vec<ShadowPolygon> {
    flattened
        .iter()
        .filter_map(|bone| {
            let unique = remove_near_duplicates(bone, vertex_epsilon);
            if unique.len() < 3 {
                return None;
            }
            let hull = convex_hull(&unique);
            let mut cleaned = remove_colinear_points(&hull, colinear_epsilon);
            if is_clockwise(&cleaned) {
                cleaned.reverse();
            }
            ShadowPolygon::new(cleaned)
        })
        .collect()
}

/// Lays flattened outlines onto the ground: shift up by `vertical_offset` (the feet) and turn
/// by `source_angle_deg + 180` so the shadow points away from the light.
pub fn rotate_shadow(
    polygons: &[ShadowPolygon],
    source_angle_deg: f32,
    vertical_offset: f32,
    epsilon: f32,
) -> Vec<ShadowPolygon> {
    let (sin, cos) = (source_angle_deg + 180.0).to_radians().sin_cos();
    polygons
        .iter()
        .map(|polygon| {
            polygon.map_points(|p| {
                let x = p.x;
                let y = p.y - vertical_offset;
                Vec2::new(
                    clamp_away_from_zero(x * cos - y * sin, epsilon),
                    clamp_away_from_zero(x * sin + y * cos, epsilon),
                )
            })
        })
        .collect()
}

/// Length multiplier for a shadow cast by a body `base_height` tall with the light
/// `vertical_angle_deg` above the horizon.
pub fn morph_shadow_size(base_height: f32, vertical_angle_deg: f32, sizing: ShadowSizing) -> f32 {
    match sizing {
        ShadowSizing::Fixed => 1.0,
        ShadowSizing::Elevation {
            horizon_stretch,
            overhead_length,
        } => {
            if base_height <= f32::EPSILON {
                return 1.0;
            }
            let t = vertical_angle_deg.clamp(0.0, 90.0).to_radians().cos();
            let target = overhead_length + (horizon_stretch * base_height - overhead_length) * t;
            (target / base_height).max(MIN_SIZE_MULTIPLIER)
        }
    }
}

/// Scales outlines along y about `anchor_y` (the feet line, before [`rotate_shadow`]).
pub fn squish_shadow(
    polygons: &[ShadowPolygon],
    multiplier: f32,
    anchor_y: f32,
) -> Vec<ShadowPolygon> {
    if (multiplier - 1.0).abs() <= f32::EPSILON {
        return polygons.to_vec();
    }
    polygons
        .iter()
        .map(|polygon| {
            polygon.map_points(|p| Vec2::new(p.x, anchor_y + (p.y - anchor_y) * multiplier))
        })
        .collect()
}

/// `value`, or `±epsilon` when it is closer to zero than that.
pub fn clamp_away_from_zero(value: f32, epsilon: f32) -> f32 {
    if value.abs() >= epsilon {
        value
    } else if value + epsilon / 10.0 >= 0.0 {
        epsilon
    } else {
        -epsilon
    }
}
