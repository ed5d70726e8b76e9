use super::{ModelDef, PartMotion};
use crate::{cube, part};

const LEG_SWING: f32 = 1.4;

pub static CREEPER_MODEL: ModelDef = ModelDef {
    name: "creeper",
    parts: &[
        part! {
            name: "head",
            parent: None,
            pivot: (0.0, 6.0, 0.0),
            motion: PartMotion::Look,
            cubes: [
                cube! { from: (-4.0, -8.0, -4.0), size: (8.0, 8.0, 8.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "body",
            parent: None,
            pivot: (0.0, 6.0, 0.0),
            cubes: [
                cube! { from: (-4.0, 0.0, -2.0), size: (8.0, 12.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "leg_front_right",
            parent: None,
            pivot: (-2.0, 18.0, 4.0),
            motion: PartMotion::swing(LEG_SWING, false),
            cubes: [
                cube! { from: (-2.0, 0.0, -2.0), size: (4.0, 6.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "leg_front_left",
            parent: None,
            pivot: (2.0, 18.0, 4.0),
            motion: PartMotion::swing(LEG_SWING, true),
            cubes: [
                cube! { from: (-2.0, 0.0, -2.0), size: (4.0, 6.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "leg_back_right",
            parent: None,
            pivot: (-2.0, 18.0, -4.0),
            motion: PartMotion::swing(LEG_SWING, true),
            cubes: [
                cube! { from: (-2.0, 0.0, -2.0), size: (4.0, 6.0, 4.0), inflate: 0.0 },
            ],
        },
        part! {
            name: "leg_back_left",
            parent: None,
            pivot: (2.0, 18.0, -4.0),
            motion: PartMotion::swing(LEG_SWING, false),
            cubes: [
                cube! { from: (-2.0, 0.0, -2.0), size: (4.0, 6.0, 4.0), inflate: 0.0 },
            ],
        },
    ],
};
