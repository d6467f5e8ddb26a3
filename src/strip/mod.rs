pub mod builder;
pub mod morph;
pub mod rail;
pub mod strip_object;
pub mod strip_mesh;
pub mod strip_props;
pub use builder::*;
pub use morph::*;
pub use rail::*;
pub use strip_object::*;
pub use strip_mesh::*;
pub use strip_props::*;

#[cfg(test)]
mod tests;
