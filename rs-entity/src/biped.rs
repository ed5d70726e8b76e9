use std::f32::consts::FRAC_PI_2;

use super::{ModelDef, PartDef, PartMotion};
use crate::{cube, part};

// Part indices shared by every biped-shaped model below.
pub const BIPED_HEAD: usize = 0;
pub const BIPED_HEADWEAR: usize = 1;
pub const BIPED_BODY: usize = 2;
pub const BIPED_RIGHT_ARM: usize = 3;
pub const BIPED_LEFT_ARM: usize = 4;
pub const BIPED_RIGHT_LEG: usize = 5;
pub const BIPED_LEFT_LEG: usize = 6;

const ARM_SWING: f32 = 1.0;
const LEG_SWING: f32 = 1.4;

const HEAD: PartDef = part! {
    name: "head",
    parent: None,
    pivot: (0.0, 0.0, 0.0),
    motion: PartMotion::Look,
    cubes: [
        cube! { from: (-4.0, -8.0, -4.0), size: (8.0, 8.0, 8.0), inflate: 0.0 },
    ],
};

// Hat layer. Folded into the head bone by consumers.
const HEADWEAR: PartDef = part! {
    name: "headwear",
    parent: Some(BIPED_HEAD),
    pivot: (0.0, 0.0, 0.0),
    cubes: [
        cube! { from: (-4.0, -8.0, -4.0), size: (8.0, 8.0, 8.0), inflate: 0.5 },
    ],
};

const BODY: PartDef = part! {
    name: "body",
    parent: None,
    pivot: (0.0, 0.0, 0.0),
    cubes: [
        cube! { from: (-4.0, 0.0, -2.0), size: (8.0, 12.0, 4.0), inflate: 0.0 },
    ],
};

const RIGHT_LEG: PartDef = part! {
    name: "right_leg",
    parent: None,
    pivot: (-1.9, 12.0, 0.0),
    motion: PartMotion::swing(LEG_SWING, false),
    cubes: [
        cube! { from: (-2.0, 0.0, -2.0), size: (4.0, 12.0, 4.0), inflate: 0.0 },
    ],
};

const LEFT_LEG: PartDef = part! {
    name: "left_leg",
    parent: None,
    pivot: (1.9, 12.0, 0.0),
    motion: PartMotion::swing(LEG_SWING, true),
    cubes: [
        cube! { from: (-2.0, 0.0, -2.0), size: (4.0, 12.0, 4.0), inflate: 0.0 },
    ],
};

pub static BIPED_MODEL: ModelDef = ModelDef {
    name: "biped",
    parts: &[
        HEAD,
        HEADWEAR,
        BODY,
        part! {
            name: "right_arm",
            parent: None,
            pivot: (-5.0, 2.0, 0.0),
            motion: PartMotion::swing(ARM_SWING, true),
            cubes: [
                cube! { from: (-3.0, -2.0, -2.0), size: (4.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "left_arm",
            parent: None,
            pivot: (5.0, 2.0, 0.0),
            motion: PartMotion::swing(ARM_SWING, false),
            cubes: [
                cube! { from: (-1.0, -2.0, -2.0), size: (4.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        RIGHT_LEG,
        LEFT_LEG,
    ],
};

/// Slim-armed player variant (3px arms).
pub static BIPED_SLIM_MODEL: ModelDef = ModelDef {
    name: "biped_slim",
    parts: &[
        HEAD,
        HEADWEAR,
        BODY,
        part! {
            name: "right_arm",
            parent: None,
            pivot: (-5.0, 2.5, 0.0),
            motion: PartMotion::swing(ARM_SWING, true),
            cubes: [
                cube! { from: (-2.0, -2.0, -2.0), size: (3.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "left_arm",
            parent: None,
            pivot: (5.0, 2.5, 0.0),
            motion: PartMotion::swing(ARM_SWING, false),
            cubes: [
                cube! { from: (-1.0, -2.0, -2.0), size: (3.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        RIGHT_LEG,
        LEFT_LEG,
    ],
};

/// Zombies and pigmen hold both arms straight out in front.
pub static ZOMBIE_MODEL: ModelDef = ModelDef {
    name: "zombie",
    parts: &[
        HEAD,
        HEADWEAR,
        BODY,
        part! {
            name: "right_arm",
            parent: None,
            pivot: (-5.0, 2.0, 0.0),
            rotation: (-FRAC_PI_2, 0.0, 0.0),
            cubes: [
                cube! { from: (-3.0, -2.0, -2.0), size: (4.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "left_arm",
            parent: None,
            pivot: (5.0, 2.0, 0.0),
            rotation: (-FRAC_PI_2, 0.0, 0.0),
            cubes: [
                cube! { from: (-1.0, -2.0, -2.0), size: (4.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        RIGHT_LEG,
        LEFT_LEG,
    ],
};

pub static SKELETON_MODEL: ModelDef = ModelDef {
    name: "skeleton",
    parts: &[
        HEAD,
        HEADWEAR,
        BODY,
        part! {
            name: "right_arm",
            parent: None,
            pivot: (-5.0, 2.0, 0.0),
            motion: PartMotion::swing(ARM_SWING, true),
            cubes: [
                cube! { from: (-1.0, -2.0, -1.0), size: (2.0, 12.0, 2.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "left_arm",
            parent: None,
            pivot: (5.0, 2.0, 0.0),
            motion: PartMotion::swing(ARM_SWING, false),
            cubes: [
                cube! { from: (-1.0, -2.0, -1.0), size: (2.0, 12.0, 2.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "right_leg",
            parent: None,
            pivot: (-2.0, 12.0, 0.0),
            motion: PartMotion::swing(LEG_SWING, false),
            cubes: [
                cube! { from: (-1.0, 0.0, -1.0), size: (2.0, 12.0, 2.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "left_leg",
            parent: None,
            pivot: (2.0, 12.0, 0.0),
            motion: PartMotion::swing(LEG_SWING, true),
            cubes: [
                cube! { from: (-1.0, 0.0, -1.0), size: (2.0, 12.0, 2.0), inflate: 0.0 },
            ],
        },
    ],
};
