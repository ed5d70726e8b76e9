use std::f32::consts::TAU;

use bevy::prelude::Vec3;
use rs_utils::block_center;

use crate::host::ShadowWorld;

/// Direction toward a light, in degrees. `horizontal_deg` follows the projector's convention
/// (`atan2(dz, dx) + 90`, in `[0, 360)`); `vertical_deg` is elevation above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub horizontal_deg: f32,
    pub vertical_deg: f32,
}

impl LightSource {
    /// False for lights below the horizon and for NaN elevations.
    pub fn is_above_horizon(&self) -> bool {
        self.vertical_deg >= 0.0
    }
}

/// The sun, or `None` while it is down. It rises in the east (-90) and sets in the west (+90).
pub fn sun_light_source(celestial_phase: f32) -> Option<LightSource> {
    let elevation = (TAU * celestial_phase).cos();
    if elevation <= 0.0 {
        return None;
    }
    let horizontal_deg = if celestial_phase < 0.5 { -90.0 } else { 90.0 };
    let source = LightSource {
        horizontal_deg,
        vertical_deg: elevation.clamp(-1.0, 1.0).asin().to_degrees(),
    };
    source.is_above_horizon().then_some(source)
}

pub fn emitter_light_source(entity_pos: Vec3, light_pos: Vec3) -> LightSource {
    let d = light_pos - entity_pos;
    let mut horizontal_deg = d.z.atan2(d.x).to_degrees() + 90.0;
    if horizontal_deg < 0.0 {
        horizontal_deg += 360.0;
    }
    let vertical_deg = d.y.atan2((d.x * d.x + d.z * d.z).sqrt()).to_degrees();
    LightSource {
        horizontal_deg,
        vertical_deg,
    }
}

/// Sun (if up) followed by every emitter that sits above the entity's feet.
pub fn resolve_light_sources(
    celestial_phase: f32,
    entity_pos: Vec3,
    emitters: &[Vec3],
) -> Vec<LightSource> {
    sun_light_source(celestial_phase)
        .into_iter()
        .chain(
            emitters
                .iter()
                .map(|light| emitter_light_source(entity_pos, *light))
                .filter(LightSource::is_above_horizon),
        )
        .collect()
}

/// Centres of emitting blocks within `radius` whose light reaches `feet` and which the
/// entity can see from `eye`.
///
/// An emitter reaches the entity when its luminance squared beats the squared distance.
pub fn nearby_light_positions<W: ShadowWorld + ?Sized>(
    world: &W,
    feet: Vec3,
    eye: Vec3,
    radius: i32,
) -> Vec<Vec3> {
    world
        .light_emitters_near(rs_utils::block_pos(feet), radius)
        .into_iter()
        .filter_map(|(pos, luminance)| {
            let center = block_center(pos);
            let reach = f32::from(luminance);
            (reach * reach > feet.distance_squared(center)
                && world.is_line_of_sight_clear(eye, center))
            .then_some(center)
        })
        .collect()
}
