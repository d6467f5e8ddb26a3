use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

use super::Curve3D;

/// Cubic Bezier curve defined by four control points
#[derive(Clone, Debug, PartialEq)]
pub struct CubicBezierCurve3<T: FloatingPoint> {
    control_points: [Point3<T>; 4],
}

impl<T: FloatingPoint> CubicBezierCurve3<T> {
    /// Create a new cubic Bezier curve
    /// # Failures
    /// - if every control point coincides (the curve collapses to a point)
    pub fn try_new(control_points: [Point3<T>; 4]) -> anyhow::Result<Self> {
        let first = control_points[0];
        anyhow::ensure!(
            control_points
                .iter()
                .any(|p| (p - first).norm() > T::default_epsilon()),
            "Control points must not all coincide"
        );
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Point3<T>; 4] {
        &self.control_points
    }

    fn derivative(&self, u: T) -> Vector3<T> {
        let [p0, p1, p2, p3] = &self.control_points;
        let three: T = nalgebra::convert(3.0);
        let six: T = nalgebra::convert(6.0);
        let v = T::one() - u;
        (p1 - p0) * (three * v * v) + (p2 - p1) * (six * v * u) + (p3 - p2) * (three * u * u)
    }
}

impl<T: FloatingPoint> Curve3D<T> for CubicBezierCurve3<T> {
    fn point_at(&self, u: T) -> Point3<T> {
        let [p0, p1, p2, p3] = &self.control_points;
        let three: T = nalgebra::convert(3.0);
        let v = T::one() - u;
        let coords = p0.coords * (v * v * v)
            + p1.coords * (three * v * v * u)
            + p2.coords * (three * v * u * u)
            + p3.coords * (u * u * u);
        Point3::from(coords)
    }

    fn tangent_at(&self, u: T) -> Vector3<T> {
        let d = self.derivative(u);
        if d.norm() > T::default_epsilon() {
            d.normalize()
        } else {
            // cusp at a doubled end point; fall back to the chord direction
            let [p0, _, _, p3] = &self.control_points;
            (p3 - p0).normalize()
        }
    }
}
