#![allow(clippy::needless_range_loop)]

mod anim;
mod curve;
mod error;
mod frames;
mod helper;
mod misc;
mod strip;
mod uv;
mod window;

#[cfg(feature = "bevy")]
pub mod bevy_mesh;

pub mod prelude {
    pub use crate::anim::*;
    pub use crate::curve::*;
    pub use crate::error::*;
    pub use crate::frames::*;
    pub use crate::helper::*;
    pub use crate::misc::*;
    pub use crate::strip::*;
    pub use crate::uv::*;
    pub use crate::window::*;
}
