use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

use super::Curve3D;

/// Straight segment from `start` to `end`
#[derive(Clone, Debug, PartialEq)]
pub struct LineCurve3<T: FloatingPoint> {
    start: Point3<T>,
    end: Point3<T>,
}

impl<T: FloatingPoint> LineCurve3<T> {
    /// Create a new line segment
    /// # Failures
    /// - if the end points coincide (the tangent would be undefined)
    pub fn try_new(start: Point3<T>, end: Point3<T>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (end - start).norm() > T::default_epsilon(),
            "Line end points must not coincide"
        );
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &Point3<T> {
        &self.start
    }

    pub fn end(&self) -> &Point3<T> {
        &self.end
    }
}

impl<T: FloatingPoint> Curve3D<T> for LineCurve3<T> {
    fn point_at(&self, u: T) -> Point3<T> {
        self.start + (self.end - self.start) * u
    }

    fn tangent_at(&self, _u: T) -> Vector3<T> {
        (self.end - self.start).normalize()
    }
}
