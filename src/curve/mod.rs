pub mod bezier_curve;
pub mod curve3d;
pub mod helix_curve;
pub mod line_curve;
pub use bezier_curve::*;
pub use curve3d::*;
pub use helix_curve::*;
pub use line_curve::*;
