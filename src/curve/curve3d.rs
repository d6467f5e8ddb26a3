use std::{rc::Rc, sync::Arc};

use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// A parametrized 3D path evaluated over the normalized domain `[0, 1]`.
///
/// Implementors must return a unit tangent from [`Curve3D::tangent_at`];
/// frame propagation does not validate it.
pub trait Curve3D<T: FloatingPoint> {
    /// Evaluate the curve at a given parameter to get a point
    fn point_at(&self, u: T) -> Point3<T>;

    /// Evaluate the curve at a given parameter to get a unit tangent vector
    ///
    /// The default implementation takes a central difference of [`Curve3D::point_at`]
    /// clamped to the domain.
    fn tangent_at(&self, u: T) -> Vector3<T> {
        let delta: T = nalgebra::convert(1e-4);
        let u0 = (u - delta).max(T::zero());
        let u1 = (u + delta).min(T::one());
        (self.point_at(u1) - self.point_at(u0)).normalize()
    }
}

impl<T: FloatingPoint, C: Curve3D<T> + ?Sized> Curve3D<T> for &C {
    fn point_at(&self, u: T) -> Point3<T> {
        (**self).point_at(u)
    }

    fn tangent_at(&self, u: T) -> Vector3<T> {
        (**self).tangent_at(u)
    }
}

impl<T: FloatingPoint, C: Curve3D<T> + ?Sized> Curve3D<T> for Box<C> {
    fn point_at(&self, u: T) -> Point3<T> {
        (**self).point_at(u)
    }

    fn tangent_at(&self, u: T) -> Vector3<T> {
        (**self).tangent_at(u)
    }
}

impl<T: FloatingPoint, C: Curve3D<T> + ?Sized> Curve3D<T> for Rc<C> {
    fn point_at(&self, u: T) -> Point3<T> {
        (**self).point_at(u)
    }

    fn tangent_at(&self, u: T) -> Vector3<T> {
        (**self).tangent_at(u)
    }
}

impl<T: FloatingPoint, C: Curve3D<T> + ?Sized> Curve3D<T> for Arc<C> {
    fn point_at(&self, u: T) -> Point3<T> {
        (**self).point_at(u)
    }

    fn tangent_at(&self, u: T) -> Vector3<T> {
        (**self).tangent_at(u)
    }
}
