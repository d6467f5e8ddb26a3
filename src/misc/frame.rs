use nalgebra::{IsometryMatrix3, Matrix3, Point3, Rotation3, Translation3, Unit, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// A right-handed coordinate frame at a sample point on a curve.
/// `tangent × binormal = normal`; the binormal spans the strip breadth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<T: FloatingPoint> {
    position: Point3<T>,
    tangent: Vector3<T>,
    binormal: Vector3<T>,
    normal: Vector3<T>,
}

impl<T: FloatingPoint> Frame<T> {
    pub fn new(
        position: Point3<T>,
        tangent: Vector3<T>,
        binormal: Vector3<T>,
        normal: Vector3<T>,
    ) -> Self {
        Self {
            position,
            tangent,
            binormal,
            normal,
        }
    }

    pub fn position(&self) -> &Point3<T> {
        &self.position
    }

    pub fn tangent(&self) -> &Vector3<T> {
        &self.tangent
    }

    pub fn binormal(&self) -> &Vector3<T> {
        &self.binormal
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    /// Roll the cross-section around the tangent by `angle` radians.
    /// A zero angle leaves the frame untouched.
    pub fn tilted(mut self, angle: T) -> Self {
        if angle != T::zero() {
            let rot = Rotation3::from_axis_angle(&Unit::new_normalize(self.tangent), angle);
            self.binormal = rot * self.binormal;
            self.normal = rot * self.normal;
        }
        self
    }

    /// Returns the transformation that maps local axes (x: binormal, y: normal, z: tangent)
    /// to the frame placed on the curve.
    pub fn matrix(&self) -> IsometryMatrix3<T> {
        let basis = Matrix3::from_columns(&[self.binormal, self.normal, self.tangent]);
        let rot = Rotation3::from_matrix_unchecked(basis);
        let trans = Translation3::from(self.position);
        trans * rot
    }

    /// Cast the frame to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> Frame<F> {
        Frame {
            position: self.position.cast(),
            tangent: self.tangent.cast(),
            binormal: self.binormal.cast(),
            normal: self.normal.cast(),
        }
    }
}
