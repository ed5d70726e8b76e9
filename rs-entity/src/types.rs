#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDef {
    /// Lower corner (x, y, z) in "model pixels", relative to the owning part's pivot (+Y is down).
    pub from: [f32; 3],
    /// Dimensions (w, h, d) in model pixels.
    pub size: [f32; 3],
    /// Inflate amount in model pixels (vanilla `addBox(..., modelSize)`).
    pub inflate: f32,
}

impl CubeDef {
    /// Inflated (min, max) corners, relative to the part pivot.
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        let inf = self.inflate;
        let min = [
            self.from[0] - inf,
            self.from[1] - inf,
            self.from[2] - inf,
        ];
        let max = [
            self.from[0] + self.size[0] + inf,
            self.from[1] + self.size[1] + inf,
            self.from[2] + self.size[2] + inf,
        ];
        (min, max)
    }
}

/// How a part moves when the model is posed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartMotion {
    Rigid,
    /// Follows the entity's head yaw and pitch.
    Look,
    /// Swings about X while walking; `opposite` parts run half a cycle behind.
    Swing { amplitude: f32, opposite: bool },
}

impl PartMotion {
    pub const fn swing(amplitude: f32, opposite: bool) -> Self {
        Self::Swing {
            amplitude,
            opposite,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PartDef {
    pub name: &'static str,
    /// Index of the parent part, if any. Child pivots are relative to the parent pivot.
    pub parent: Option<usize>,
    /// Rotation point / pivot in model pixels (vanilla coordinates; +Y is down).
    pub pivot: [f32; 3],
    /// Rest rotation (pitch, yaw, roll) in radians.
    pub rotation: [f32; 3],
    pub motion: PartMotion,
    pub cubes: &'static [CubeDef],
}

#[derive(Debug, Clone, Copy)]
pub struct ModelDef {
    /// Stable identifier, used as a cache key by consumers.
    pub name: &'static str,
    pub parts: &'static [PartDef],
}

impl ModelDef {
    /// Indices of parts without a parent. Children are folded into these.
    pub fn root_parts(&self) -> impl Iterator<Item = usize> + '_ {
        self.parts
            .iter()
            .enumerate()
            .filter(|(_, part)| part.parent.is_none())
            .map(|(idx, _)| idx)
    }

    /// Index of the root ancestor of `index`, guarding against cyclic parent links.
    pub fn root_of(&self, index: usize) -> Option<usize> {
        let mut current = index;
        for _ in 0..=self.parts.len() {
            match self.parts.get(current)?.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
        None
    }

    /// Pivot of `index` relative to its root ancestor's pivot.
    pub fn pivot_from_root(&self, index: usize) -> Option<[f32; 3]> {
        let mut offset = [0.0f32; 3];
        let mut current = index;
        for _ in 0..=self.parts.len() {
            let part = self.parts.get(current)?;
            let Some(parent) = part.parent else {
                return Some(offset);
            };
            for axis in 0..3 {
                offset[axis] += part.pivot[axis];
            }
            current = parent;
        }
        None
    }

    pub fn part_index(&self, name: &str) -> Option<usize> {
        self.parts.iter().position(|part| part.name == name)
    }
}
