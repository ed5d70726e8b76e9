use super::{ModelDef, PartDef, PartMotion};
use crate::{cube, part};

pub const QUADRUPED_HEAD: usize = 0;
pub const QUADRUPED_BODY: usize = 1;
pub const QUADRUPED_LEG_FRONT_RIGHT: usize = 2;
pub const QUADRUPED_LEG_FRONT_LEFT: usize = 3;
pub const QUADRUPED_LEG_BACK_RIGHT: usize = 4;
pub const QUADRUPED_LEG_BACK_LEFT: usize = 5;

const LEG_SWING: f32 = 1.4;

// Vanilla builds quadruped bodies upright and rotates them by 90 degrees about X at render
// time. The boxes below are stored already lying flat, so the rest rotation stays zero.

/// Four legs of `$height` px with pivots at `(±$x, 24 - $height, $front_z / $back_z)`.
macro_rules! quadruped_legs {
    ($height:expr, $x:expr, $front_z:expr, $back_z:expr) => {
        [
            part! {
                name: "leg_front_right",
                parent: None,
                pivot: (-$x, 24.0 - $height, $front_z),
                motion: PartMotion::swing(LEG_SWING, false),
                cubes: [
                    cube! { from: (-2.0, 0.0, -2.0), size: (4.0, $height, 4.0), inflate: 0.0 },
                ],
            },
            part! {
                name: "leg_front_left",
                parent: None,
                pivot: ($x, 24.0 - $height, $front_z),
                motion: PartMotion::swing(LEG_SWING, true),
                cubes: [
                    cube! { from: (-2.0, 0.0, -2.0), size: (4.0, $height, 4.0), inflate: 0.0 },
                ],
            },
            part! {
                name: "leg_back_right",
                parent: None,
                pivot: (-$x, 24.0 - $height, $back_z),
                motion: PartMotion::swing(LEG_SWING, true),
                cubes: [
                    cube! { from: (-2.0, 0.0, -2.0), size: (4.0, $height, 4.0), inflate: 0.0 },
                ],
            },
            part! {
                name: "leg_back_left",
                parent: None,
                pivot: ($x, 24.0 - $height, $back_z),
                motion: PartMotion::swing(LEG_SWING, false),
                cubes: [
                    cube! { from: (-2.0, 0.0, -2.0), size: (4.0, $height, 4.0), inflate: 0.0 },
                ],
            },
        ]
    };
}

const PIG_LEGS: [PartDef; 4] = quadruped_legs!(6.0, 3.0, 7.0, -5.0);
const SHEEP_LEGS: [PartDef; 4] = quadruped_legs!(12.0, 3.0, 7.0, -5.0);
const COW_LEGS: [PartDef; 4] = quadruped_legs!(12.0, 4.0, 7.0, -6.0);

pub static PIG_MODEL: ModelDef = ModelDef {
    name: "pig",
    parts: &[
        part! {
            name: "head",
            parent: None,
            pivot: (0.0, 12.0, -6.0),
            motion: PartMotion::Look,
            cubes: [
                cube! { from: (-4.0, -4.0, -8.0), size: (8.0, 8.0, 8.0), inflate: 0.0 },
                // Snout
                cube! { from: (-2.0, 0.0, -9.0), size: (4.0, 3.0, 1.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "body",
            parent: None,
            pivot: (0.0, 11.0, 2.0),
            cubes: [
                cube! { from: (-5.0, -1.0, -10.0), size: (10.0, 8.0, 16.0), inflate: 0.0 },
            ],
        },
        PIG_LEGS[0],
        PIG_LEGS[1],
        PIG_LEGS[2],
        PIG_LEGS[3],
    ],
};

pub static SHEEP_MODEL: ModelDef = ModelDef {
    name: "sheep",
    parts: &[
        part! {
            name: "head",
            parent: None,
            pivot: (0.0, 6.0, -8.0),
            motion: PartMotion::Look,
            cubes: [
                cube! { from: (-3.0, -4.0, -6.0), size: (6.0, 6.0, 8.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "body",
            parent: None,
            pivot: (0.0, 5.0, 2.0),
            cubes: [
                cube! { from: (-4.0, 1.0, -10.0), size: (8.0, 6.0, 16.0), inflate: 0.0 },
            ],
        },
        SHEEP_LEGS[0],
        SHEEP_LEGS[1],
        SHEEP_LEGS[2],
        SHEEP_LEGS[3],
    ],
};

pub static COW_MODEL: ModelDef = ModelDef {
    name: "cow",
    parts: &[
        part! {
            name: "head",
            parent: None,
            pivot: (0.0, 4.0, -8.0),
            motion: PartMotion::Look,
            cubes: [
                cube! { from: (-4.0, -4.0, -6.0), size: (8.0, 8.0, 6.0), inflate: 0.0 },
                // Horns
                cube! { from: (-5.0, -5.0, -4.0), size: (1.0, 3.0, 1.0), inflate: 0.0 },
                cube! { from: (4.0, -5.0, -4.0), size: (1.0, 3.0, 1.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "body",
            parent: None,
            pivot: (0.0, 5.0, 2.0),
            cubes: [
                cube! { from: (-6.0, -3.0, -10.0), size: (12.0, 10.0, 18.0), inflate: 0.0 },
                // Udder
                cube! { from: (-2.0, 7.0, 2.0), size: (4.0, 1.0, 6.0), inflate: 0.0 },
            ],
        },
        COW_LEGS[0],
        COW_LEGS[1],
        COW_LEGS[2],
        COW_LEGS[3],
    ],
};
