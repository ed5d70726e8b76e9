//! Vanilla-style (1.8.9) entity model definitions used for shadow casting.
//!
//! Key constraints for this crate:
//! - Models are hardcoded as Rust static data (parts + cuboids), no runtime model loading.
//! - Only the geometry matters here: no UVs, no mirroring, no meshes.
//! - Which model an entity uses is decided by [`ModelRegistry`], built once at startup.

mod biped;
mod creeper;
mod pose;
mod quadruped;
mod registry;
mod types;

pub use biped::*;
pub use creeper::*;
pub use pose::*;
pub use quadruped::*;
pub use registry::*;
pub use types::*;

// Small DSL macros to make defining cuboid models less painful.
// Intentionally kept as `macro_rules!` (no proc-macro / extra deps).

#[macro_export]
macro_rules! cube {
    (
        from: ($x:expr, $y:expr, $z:expr),
        size: ($w:expr, $h:expr, $d:expr),
        inflate: $inflate:expr $(,)?
    ) => {
        $crate::CubeDef {
            from: [$x as f32, $y as f32, $z as f32],
            size: [$w as f32, $h as f32, $d as f32],
            inflate: $inflate as f32,
        }
    };
}

#[macro_export]
macro_rules! part {
    (@rotation) => {
        [0.0, 0.0, 0.0]
    };
    (@rotation ($rx:expr, $ry:expr, $rz:expr)) => {
        [$rx as f32, $ry as f32, $rz as f32]
    };
    (@motion) => {
        $crate::PartMotion::Rigid
    };
    (@motion $motion:expr) => {
        $motion
    };
    (
        name: $name:expr,
        parent: $parent:expr,
        pivot: ($x:expr, $y:expr, $z:expr),
        $(rotation: $rotation:tt,)?
        $(motion: $motion:expr,)?
        cubes: [ $($cube:expr),* $(,)? ] $(,)?
    ) => {
        $crate::PartDef {
            name: $name,
            parent: $parent,
            pivot: [$x as f32, $y as f32, $z as f32],
            rotation: $crate::part!(@rotation $($rotation)?),
            motion: $crate::part!(@motion $($motion)?),
            cubes: &[$($cube),*],
        }
    };
}
