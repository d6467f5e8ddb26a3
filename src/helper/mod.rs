pub mod frame_axes;
pub use frame_axes::*;
