use std::fmt;

use crate::{
    curve::Curve3D,
    frames::compute_tilted_frames,
    misc::{FloatingPoint, Frame, ScalarFn, UvFn},
    window::ParsedWindow,
};

use super::{build_mesh, Morph, MorphTarget, RailSamples, StripMesh};

/// Every input a strip is computed from
#[derive(Clone)]
pub struct StripProps<T: FloatingPoint, C> {
    pub curve: C,
    pub window: ParsedWindow,
    pub radius: ScalarFn<T>,
    pub tilt: ScalarFn<T>,
    pub uv: Option<UvFn<T>>,
    pub morphs: Vec<Morph<T, C>>,
}

/// Everything a strip computes from its props
#[derive(Clone, Debug, PartialEq)]
pub struct StripOutput<T: FloatingPoint> {
    pub frames: Vec<Frame<T>>,
    pub rail: RailSamples<T>,
    pub mesh: StripMesh<T>,
}

impl<T: FloatingPoint, C: Curve3D<T>> StripProps<T, C> {
    pub fn new(curve: C, window: ParsedWindow) -> Self {
        Self {
            curve,
            window,
            radius: ScalarFn::Constant(nalgebra::convert(0.5)),
            tilt: ScalarFn::Constant(T::zero()),
            uv: None,
            morphs: vec![],
        }
    }

    /// Compute frames, rail samples and the mesh with its morph targets from scratch
    pub fn build(&self) -> StripOutput<T> {
        let (frames, rail, mut mesh) = build_strip(
            &self.curve,
            &self.window,
            &self.radius,
            &self.tilt,
            self.uv.as_ref(),
        );

        mesh.morph_targets = self
            .morphs
            .iter()
            .map(|morph| {
                let (_, _, m) =
                    build_strip(&morph.curve, &self.window, &morph.radius, &morph.tilt, None);
                MorphTarget::new(m.points, m.normals)
            })
            .collect();

        StripOutput { frames, rail, mesh }
    }
}

fn build_strip<T: FloatingPoint, C: Curve3D<T>>(
    curve: &C,
    window: &ParsedWindow,
    radius: &ScalarFn<T>,
    tilt: &ScalarFn<T>,
    uv: Option<&UvFn<T>>,
) -> (Vec<Frame<T>>, RailSamples<T>, StripMesh<T>) {
    let frames = compute_tilted_frames(curve, window.segments(), tilt);
    let rail = RailSamples::new(&frames, radius);
    let mesh = build_mesh(&rail, window, uv);
    (frames, rail, mesh)
}

impl<T: FloatingPoint, C> fmt::Debug for StripProps<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripProps")
            .field("window", &self.window)
            .field("radius", &self.radius)
            .field("tilt", &self.tilt)
            .field("uv", &self.uv.is_some())
            .field("morphs", &self.morphs.len())
            .finish_non_exhaustive()
    }
}
