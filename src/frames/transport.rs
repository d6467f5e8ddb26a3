use nalgebra::{Rotation3, Unit, Vector3};

use crate::{
    curve::Curve3D,
    misc::{FloatingPoint, Frame, ScalarFn},
};

/// Compute rotation-minimizing frames at `segments + 1` evenly spaced parameters `i / segments`
/// based on the method described in the paper: http://www.cs.indiana.edu/pub/techreports/TR425.pdf
///
/// The binormal of the first frame is seeded from the world axis least aligned with the first
/// tangent, then carried along by the minimal rotation between consecutive tangents.
pub fn compute_frames<T: FloatingPoint, C: Curve3D<T> + ?Sized>(
    curve: &C,
    segments: usize,
) -> Vec<Frame<T>> {
    let segments = segments.max(1);
    let mut frames = Vec::with_capacity(segments + 1);

    let mut tangent = curve.tangent_at(T::zero());
    let seed = least_aligned_axis(&tangent);
    let mut binormal = tangent.cross(&seed).normalize();
    let mut normal = tangent.cross(&binormal);
    frames.push(Frame::new(
        curve.point_at(T::zero()),
        tangent,
        binormal,
        normal,
    ));

    for i in 1..=segments {
        let u = T::ratio(i, segments);
        let next = curve.tangent_at(u);

        let axis = tangent.cross(&next);
        if axis.norm() > T::default_epsilon() {
            let theta = tangent.dot(&next).clamp(-T::one(), T::one()).acos();
            let rot = Rotation3::from_axis_angle(&Unit::new_normalize(axis), theta);
            binormal = rot * binormal;
        }

        // restore exact orthonormality against the new tangent
        normal = next.cross(&binormal).normalize();
        binormal = normal.cross(&next).normalize();
        tangent = next;

        frames.push(Frame::new(curve.point_at(u), tangent, binormal, normal));
    }

    frames
}

/// Compute frames and roll each cross-section by `tilt(i, segments)` radians around its tangent
pub fn compute_tilted_frames<T: FloatingPoint, C: Curve3D<T> + ?Sized>(
    curve: &C,
    segments: usize,
    tilt: &ScalarFn<T>,
) -> Vec<Frame<T>> {
    let frames = compute_frames(curve, segments);
    if let ScalarFn::Constant(angle) = tilt {
        if *angle == T::zero() {
            return frames;
        }
    }
    let n = frames.len() - 1;
    frames
        .into_iter()
        .enumerate()
        .map(|(i, frame)| frame.tilted(tilt.evaluate(i, n)))
        .collect()
}

/// Pick the world axis with the smallest absolute component of `v` (later axes win ties)
fn least_aligned_axis<T: FloatingPoint>(v: &Vector3<T>) -> Vector3<T> {
    let components = [v.x.abs(), v.y.abs(), v.z.abs()];
    let mut axis = 0;
    for (i, c) in components.iter().enumerate().skip(1) {
        if *c <= components[axis] {
            axis = i;
        }
    }
    match axis {
        0 => Vector3::x(),
        1 => Vector3::y(),
        _ => Vector3::z(),
    }
}
