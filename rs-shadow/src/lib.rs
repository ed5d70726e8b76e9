//! Light-aware entity shadows.
//!
//! Each frame, a living entity's model is reduced to a skeleton of cuboids, projected away from
//! every light that reaches it (the sun plus nearby emitting blocks), and laid on the ground as
//! translucent black triangles. Opacity fades with the light level, the entity texture's alpha
//! and the height of the entity above the ground.
//!
//! The host supplies the world through [`ShadowWorld`], texture access through
//! [`TextureAlphaSource`], and receives [`ShadowDraw`]s through a [`ShadowSink`].

pub mod appearance;
pub mod assembler;
mod error;
pub mod geometry;
pub mod host;
mod settings;
#[cfg(test)]
mod test_support;

pub use assembler::{EntityShadowState, FrameStats, ShadowAssembler};
pub use error::ShadowError;
pub use host::{
    EntityId, EntitySnapshot, SHADOW_PASS, ShadowDraw, ShadowSink, ShadowWorld,
    TextureAlphaSource,
};
pub use settings::{ShadowSettings, ShadowSizing};
