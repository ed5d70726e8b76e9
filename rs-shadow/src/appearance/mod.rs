//! Where a shadow's light comes from and how dark it is.

mod light;
mod opacity;
mod texture;

pub use light::*;
pub use opacity::*;
pub use texture::*;

#[cfg(test)]
mod tests;
