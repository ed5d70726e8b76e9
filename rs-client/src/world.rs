use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use bevy::prelude::{IVec3, Vec3};
use rs_shadow::ShadowWorld;

const CHUNK_SIZE: i32 = 16;
const SECTION_HEIGHT: i32 = 16;
const WORLD_HEIGHT: i32 = 256;
const TICKS_PER_DAY: u64 = 24_000;
/// Sky light never drops below this outdoors, even at midnight.
const MIN_SKY_LIGHT: f32 = 4.0;

pub const AIR: u16 = 0;
pub const STONE: u16 = 1;
pub const GRASS: u16 = 2;
pub const WATER: u16 = 9;
pub const LAVA: u16 = 11;
pub const GLASS: u16 = 20;
pub const TALL_GRASS: u16 = 31;
pub const TORCH: u16 = 50;
pub const GLOWSTONE: u16 = 89;
pub const JACK_O_LANTERN: u16 = 91;

#[derive(Clone, Default)]
struct ChunkColumn {
    sections: Vec<Option<Vec<u16>>>,
}

impl ChunkColumn {
    fn new() -> Self {
        Self {
            sections: vec![None; (WORLD_HEIGHT / SECTION_HEIGHT) as usize],
        }
    }

    fn section_mut(&mut self, y: i32) -> Option<&mut Vec<u16>> {
        let slot = self.sections.get_mut((y / SECTION_HEIGHT) as usize)?;
        Some(slot.get_or_insert_with(|| {
            vec![AIR; (CHUNK_SIZE * CHUNK_SIZE * SECTION_HEIGHT) as usize]
        }))
    }
}

fn section_index(local_x: i32, local_y: i32, local_z: i32) -> usize {
    (local_y * CHUNK_SIZE * CHUNK_SIZE + local_z * CHUNK_SIZE + local_x) as usize
}

/// In-memory block world for the demo, stored as 16x16 chunk columns of 16-high sections.
#[derive(Default)]
pub struct DemoWorld {
    chunks: HashMap<(i32, i32), ChunkColumn>,
    emitters: Vec<IVec3>,
    tick: u64,
    time_of_day: u64,
}

impl DemoWorld {
    pub fn new(time_of_day: u64) -> Self {
        Self {
            time_of_day: time_of_day % TICKS_PER_DAY,
            ..Self::default()
        }
    }

    /// Grass floor (top at y = 63) with a few light sources, a wall and a raised ledge.
    pub fn arena(time_of_day: u64) -> Self {
        let mut world = Self::new(time_of_day);
        for x in -24..24 {
            for z in -24..24 {
                for y in 60..63 {
                    world.set_block(IVec3::new(x, y, z), STONE);
                }
                world.set_block(IVec3::new(x, 63, z), GRASS);
            }
        }

        world.set_block(IVec3::new(3, 64, 0), TORCH);
        world.set_block(IVec3::new(-6, 66, -4), GLOWSTONE);
        world.set_block(IVec3::new(8, 64, 8), JACK_O_LANTERN);
        world.set_block(IVec3::new(-10, 63, 10), LAVA);

        // Wall between the glowstone and the east side of the arena.
        for y in 64..68 {
            for z in -8..0 {
                world.set_block(IVec3::new(-3, y, z), STONE);
            }
        }

        // Ledge five blocks up, for entities standing over a drop.
        for x in 10..13 {
            for z in -2..1 {
                world.set_block(IVec3::new(x, 68, z), STONE);
            }
        }

        world.set_block(IVec3::new(1, 64, 5), TALL_GRASS);
        world.set_block(IVec3::new(-1, 64, 5), GLASS);
        world
    }

    pub fn tick(&mut self) {
        self.tick += 1;
        self.time_of_day = (self.time_of_day + 1) % TICKS_PER_DAY;
    }

    pub fn set_block(&mut self, pos: IVec3, block_id: u16) {
        if !(0..WORLD_HEIGHT).contains(&pos.y) {
            return;
        }
        let column = self
            .chunks
            .entry((pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE)))
            .or_insert_with(ChunkColumn::new);
        let Some(section) = column.section_mut(pos.y) else {
            return;
        };
        let idx = section_index(
            pos.x.rem_euclid(CHUNK_SIZE),
            pos.y % SECTION_HEIGHT,
            pos.z.rem_euclid(CHUNK_SIZE),
        );
        section[idx] = block_id;

        self.emitters.retain(|emitter| *emitter != pos);
        if luminance(block_id) > 0 {
            self.emitters.push(pos);
        }
    }

    pub fn block_at(&self, pos: IVec3) -> u16 {
        if pos.y < 0 {
            return STONE;
        }
        if pos.y >= WORLD_HEIGHT {
            return AIR;
        }

        let Some(column) = self
            .chunks
            .get(&(pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE)))
        else {
            return AIR;
        };
        let Some(section) = column
            .sections
            .get((pos.y / SECTION_HEIGHT) as usize)
            .and_then(|v| v.as_ref())
        else {
            return AIR;
        };
        let idx = section_index(
            pos.x.rem_euclid(CHUNK_SIZE),
            pos.y % SECTION_HEIGHT,
            pos.z.rem_euclid(CHUNK_SIZE),
        );
        section.get(idx).copied().unwrap_or(AIR)
    }

    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// 0..=1 brightness of the open sky.
    fn daylight(&self) -> f32 {
        let darkness = (1.0 - ((self.celestial_phase() * TAU).cos() * 2.0 + 0.5)).clamp(0.0, 1.0);
        1.0 - darkness
    }

    fn sees_sky(&self, pos: IVec3) -> bool {
        ((pos.y + 1)..WORLD_HEIGHT).all(|y| !is_opaque(self.block_at(IVec3::new(pos.x, y, pos.z))))
    }
}

impl ShadowWorld for DemoWorld {
    fn game_time(&self) -> u64 {
        self.tick
    }

    /// Vanilla celestial angle: 0 at noon (6000), 0.5 at midnight, eased around the horizon.
    fn celestial_phase(&self) -> f32 {
        let mut phase = self.time_of_day as f32 / TICKS_PER_DAY as f32 - 0.25;
        if phase < 0.0 {
            phase += 1.0;
        }
        let eased = 1.0 - ((phase * PI).cos() + 1.0) / 2.0;
        phase + (eased - phase) / 3.0
    }

    fn light_level(&self, pos: IVec3) -> u8 {
        let sky = if self.sees_sky(pos) {
            (15.0 * self.daylight()).max(MIN_SKY_LIGHT).round() as i32
        } else {
            0
        };
        let block = self
            .emitters
            .iter()
            .map(|emitter| {
                let d = (*emitter - pos).abs();
                i32::from(luminance(self.block_at(*emitter))) - (d.x + d.y + d.z)
            })
            .max()
            .unwrap_or(0);
        sky.max(block).clamp(0, 15) as u8
    }

    fn is_block_open(&self, pos: IVec3) -> bool {
        !is_solid(self.block_at(pos))
    }

    fn block_luminance(&self, pos: IVec3) -> u8 {
        luminance(self.block_at(pos))
    }

    /// Samples every 0.1 blocks; the destination block itself never blocks.
    fn is_line_of_sight_clear(&self, from: Vec3, to: Vec3) -> bool {
        let delta = to - from;
        let len = delta.length();
        if len <= 0.05 {
            return true;
        }
        let target = to.floor().as_ivec3();
        let dir = delta / len;
        let step = 0.1f32;
        let mut t = 0.05f32;
        while t < len - 0.05 {
            let cell = (from + dir * t).floor().as_ivec3();
            if cell != target && is_opaque(self.block_at(cell)) {
                return false;
            }
            t += step;
        }
        true
    }

    fn light_emitters_near(&self, center: IVec3, radius: i32) -> Vec<(IVec3, u8)> {
        self.emitters
            .iter()
            .filter(|pos| {
                let d = (**pos - center).abs();
                d.x <= radius && d.y <= radius && d.z <= radius
            })
            .map(|pos| (*pos, self.block_luminance(*pos)))
            .collect()
    }
}

pub fn is_solid(block_id: u16) -> bool {
    match block_id {
        AIR => false,
        8 | WATER => false,
        10 | LAVA => false,
        TALL_GRASS | TORCH => false,
        _ => true,
    }
}

/// Solid blocks that also stop light.
pub fn is_opaque(block_id: u16) -> bool {
    is_solid(block_id) && block_id != GLASS
}

pub fn luminance(block_id: u16) -> u8 {
    match block_id {
        10 | LAVA => 15,
        GLOWSTONE | JACK_O_LANTERN => 15,
        TORCH => 14,
        _ => 0,
    }
}
