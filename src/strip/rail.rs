use nalgebra::{Point3, Vector3};

use crate::misc::{FloatingPoint, Frame, ScalarFn};

/// Handle pairs and smoothed vertex normals for every sample of a rail
#[derive(Clone, Debug, PartialEq)]
pub struct RailSamples<T: FloatingPoint> {
    handles: Vec<[Point3<T>; 2]>,
    normals: Vec<Vector3<T>>,
}

impl<T: FloatingPoint> RailSamples<T> {
    /// Place handles at `origin ± radius * binormal` and average the cross-section normals
    pub fn new(frames: &[Frame<T>], radius: &ScalarFn<T>) -> Self {
        let segments = frames.len().saturating_sub(1);
        let handles = frames
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let offset = f.binormal() * radius.evaluate(i, segments);
                [f.position() + offset, f.position() - offset]
            })
            .collect();
        Self {
            handles,
            normals: smooth_normals(frames),
        }
    }

    pub fn segments(&self) -> usize {
        self.handles.len().saturating_sub(1)
    }

    pub fn handles(&self) -> &[[Point3<T>; 2]] {
        &self.handles
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }
}

/// Boundary samples keep their own normal, interior samples average with both neighbors.
/// A single segment shares the average of its two cross-sections.
fn smooth_normals<T: FloatingPoint>(frames: &[Frame<T>]) -> Vec<Vector3<T>> {
    let n = frames.len();
    if n == 2 {
        let avg = (frames[0].normal() + frames[1].normal()).normalize();
        return vec![avg, avg];
    }
    (0..n)
        .map(|i| {
            if i == 0 || i == n - 1 {
                *frames[i].normal()
            } else {
                (frames[i - 1].normal() + frames[i].normal() + frames[i + 1].normal()).normalize()
            }
        })
        .collect()
}
