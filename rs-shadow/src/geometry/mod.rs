mod bones;
pub mod polygon;
mod projector;

pub use bones::*;
pub use projector::*;

#[cfg(test)]
mod tests;
