use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

use super::Curve3D;

/// Helix winding around the y axis.
/// A zero `height` degenerates into a circle in the xz plane, closed when `turns` is an integer.
#[derive(Clone, Debug, PartialEq)]
pub struct HelixCurve<T: FloatingPoint> {
    center: Point3<T>,
    radius: T,
    height: T,
    turns: T,
}

impl<T: FloatingPoint> HelixCurve<T> {
    /// Create a new helix
    /// # Failures
    /// - if the radius or the number of turns is not positive
    pub fn try_new(center: Point3<T>, radius: T, height: T, turns: T) -> anyhow::Result<Self> {
        anyhow::ensure!(radius > T::zero(), "The radius must be greater than zero");
        anyhow::ensure!(turns > T::zero(), "The turns must be greater than zero");
        Ok(Self {
            center,
            radius,
            height,
            turns,
        })
    }

    /// Closed circle with a single turn
    pub fn try_circle(center: Point3<T>, radius: T) -> anyhow::Result<Self> {
        Self::try_new(center, radius, T::zero(), T::one())
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn height(&self) -> T {
        self.height
    }

    pub fn turns(&self) -> T {
        self.turns
    }

    fn angle(&self, u: T) -> T {
        u * self.turns * T::two_pi()
    }
}

impl<T: FloatingPoint> Curve3D<T> for HelixCurve<T> {
    fn point_at(&self, u: T) -> Point3<T> {
        let theta = self.angle(u);
        self.center
            + Vector3::new(
                self.radius * theta.cos(),
                self.height * u,
                self.radius * theta.sin(),
            )
    }

    fn tangent_at(&self, u: T) -> Vector3<T> {
        let theta = self.angle(u);
        let w = self.turns * T::two_pi() * self.radius;
        Vector3::new(-w * theta.sin(), self.height, w * theta.cos()).normalize()
    }
}
