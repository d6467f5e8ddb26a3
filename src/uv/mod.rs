pub mod uv_preset;
pub use uv_preset::*;
