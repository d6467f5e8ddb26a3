pub mod keyframe_track;
pub mod rail_animation;
pub use keyframe_track::*;
pub use rail_animation::*;

#[cfg(test)]
mod tests;
