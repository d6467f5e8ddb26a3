use crate::misc::{FloatingPoint, ScalarFn};

/// Alternate `(curve, radius, tilt)` a strip can be blended towards
#[derive(Clone, Debug)]
pub struct Morph<T, C> {
    pub curve: C,
    pub radius: ScalarFn<T>,
    pub tilt: ScalarFn<T>,
}

impl<T: FloatingPoint, C> Morph<T, C> {
    /// Morph towards `curve` with the default radius (`0.5`) and no tilt
    pub fn new(curve: C) -> Self {
        Self {
            curve,
            radius: ScalarFn::Constant(nalgebra::convert(0.5)),
            tilt: ScalarFn::Constant(T::zero()),
        }
    }

    pub fn with_radius(mut self, radius: impl Into<ScalarFn<T>>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn with_tilt(mut self, tilt: impl Into<ScalarFn<T>>) -> Self {
        self.tilt = tilt.into();
        self
    }
}
