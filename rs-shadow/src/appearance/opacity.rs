use bevy::prelude::IVec3;

use crate::host::ShadowWorld;
use crate::settings::ShadowSettings;

pub const MAX_LIGHT_LEVEL: u8 = 15;

/// Open blocks directly below `feet`, counting down from the block under the feet and
/// stopping at the first solid one.
pub fn air_gap_blocks<W: ShadowWorld + ?Sized>(world: &W, feet: IVec3, max_blocks: u32) -> u32 {
    (1..=max_blocks as i32)
        .take_while(|depth| world.is_block_open(feet - IVec3::Y * *depth))
        .count() as u32
}

/// Shadow opacity at `feet`: fades with the air gap underneath, the light level and the
/// texture's average alpha.
pub fn compute_opacity<W: ShadowWorld + ?Sized>(
    world: &W,
    feet: IVec3,
    texture_alpha: f32,
    settings: &ShadowSettings,
) -> f32 {
    let gap = air_gap_blocks(world, feet, settings.max_air_gap_blocks);
    let base = (settings.base_opacity - settings.air_gap_penalty * gap as f32).max(0.0);
    let light = f32::from(world.light_level(feet).min(MAX_LIGHT_LEVEL)) / f32::from(MAX_LIGHT_LEVEL);
    base * light * texture_alpha.clamp(0.0, 1.0)
}
