use itertools::Itertools;
use nalgebra::Vector2;

use crate::{
    misc::{FloatingPoint, UvFn},
    window::ParsedWindow,
};

use super::{RailSamples, StripMesh};

/// Assemble the strip mesh of every on-run of `window` from precomputed rail samples.
///
/// Each run is a disconnected quad strip whose indices never leave its own vertex range.
/// Quads between samples `j` and `j + 1` are split into
/// `(2j, 2j+1, 2j+2)` and `(2j+2, 2j+1, 2j+3)`.
pub fn build_mesh<T: FloatingPoint>(
    rail: &RailSamples<T>,
    window: &ParsedWindow,
    uv: Option<&UvFn<T>>,
) -> StripMesh<T> {
    let runs = window.runs();
    let segments = window.segments();
    let vertices: usize = runs.iter().map(|r| 2 * r.samples()).sum();
    let quads: usize = runs.iter().map(|r| r.segments()).sum();

    let mut points = Vec::with_capacity(vertices);
    let mut normals = Vec::with_capacity(vertices);
    let mut uvs = uv.map(|_| Vec::with_capacity(vertices));
    let mut faces = Vec::with_capacity(2 * quads);

    for run in runs.iter() {
        let base = points.len();
        let local_segments = run.segments();
        for (j, i) in run.iter().enumerate() {
            points.extend_from_slice(&rail.handles()[i]);
            let normal = rail.normals()[i];
            normals.push(normal);
            normals.push(normal);

            if let (Some(f), Some(uvs)) = (uv, uvs.as_mut()) {
                let [u0, v0, u1, v1] = f(i, segments, j, local_segments);
                uvs.push(Vector2::new(u0, v0));
                uvs.push(Vector2::new(u1, v1));
            }
        }

        (0..run.samples()).tuple_windows().for_each(|(j, _)| {
            let a = base + 2 * j;
            faces.push([a, a + 1, a + 2]);
            faces.push([a + 2, a + 1, a + 3]);
        });
    }

    StripMesh {
        points,
        normals,
        uvs,
        faces,
        runs,
        morph_targets: vec![],
    }
}
