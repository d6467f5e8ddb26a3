pub mod color;
pub mod floating_point;
pub mod frame;
pub mod sample_fn;

pub use color::*;
pub use floating_point::*;
pub use frame::*;
pub use sample_fn::*;
