use std::collections::{HashMap, HashSet};

use bevy::prelude::{IVec3, Vec3};

use crate::host::ShadowWorld;

/// Solid ground below `ground_y`, uniform light, optional emitters and walls above it.
pub(crate) struct FlatWorld {
    pub ground_y: i32,
    pub light: u8,
    pub phase: f32,
    pub time: u64,
    pub emitters: HashMap<IVec3, u8>,
    pub walls: HashSet<IVec3>,
}

impl FlatWorld {
    /// Midnight, fully lit, ground top at y = 64.
    pub fn night() -> Self {
        Self {
            ground_y: 64,
            light: 15,
            phase: 0.5,
            time: 0,
            emitters: HashMap::new(),
            walls: HashSet::new(),
        }
    }

    fn is_solid(&self, pos: IVec3) -> bool {
        pos.y < self.ground_y || self.walls.contains(&pos)
    }
}

impl ShadowWorld for FlatWorld {
    fn game_time(&self) -> u64 {
        self.time
    }

    fn celestial_phase(&self) -> f32 {
        self.phase
    }

    fn light_level(&self, _pos: IVec3) -> u8 {
        self.light
    }

    fn is_block_open(&self, pos: IVec3) -> bool {
        !self.is_solid(pos)
    }

    fn block_luminance(&self, pos: IVec3) -> u8 {
        self.emitters.get(&pos).copied().unwrap_or(0)
    }

    fn is_line_of_sight_clear(&self, from: Vec3, to: Vec3) -> bool {
        let delta = to - from;
        let len = delta.length();
        let dir = delta / len.max(f32::EPSILON);
        let mut t = 0.05f32;
        while t < len - 0.05 {
            if self.is_solid((from + dir * t).floor().as_ivec3()) {
                return false;
            }
            t += 0.1;
        }
        true
    }
}
