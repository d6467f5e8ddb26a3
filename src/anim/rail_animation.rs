use nalgebra::{Point3, Vector2, Vector3};

use crate::{
    curve::Curve3D,
    error::StripError,
    misc::FloatingPoint,
    strip::{MorphTarget, RailSamples, Strip},
};

use super::{AnimationClip, Interpolation, KeyframeTrack};

/// A short strip sliding along a rail strip.
///
/// For every rail offset `0..=segments` a morph target holds the window of `window` segments
/// starting at that offset, wrapping past the rail end back to its start.
/// A discrete track per offset turns its target fully on at `offset / segments * duration`.
///
/// The geometry is a non-indexed triangle list: each window segment emits the quad's
/// triangles `(0, 1, 2)` and `(2, 1, 3)`, where `0, 1` are the handles of its first sample
/// and `2, 3` those of the next.
#[derive(Debug, Clone, PartialEq)]
pub struct RailAnimation<T: FloatingPoint> {
    window: usize,
    duration: T,
    points: Vec<Point3<T>>,
    normals: Vec<Vector3<T>>,
    uvs: Option<Vec<Vector2<T>>>,
    morph_targets: Vec<MorphTarget<T>>,
    clip: AnimationClip<T>,
}

impl<T: FloatingPoint> RailAnimation<T> {
    /// Build the animation over `strip`, with a moving strip of `window` segments
    /// (clamped to `1..=segments`) played over `duration`
    /// # Failures
    /// - if the rail strip has been disposed
    pub fn try_new<C: Curve3D<T>>(
        strip: &Strip<T, C>,
        window: usize,
        duration: T,
    ) -> Result<Self, StripError> {
        let rail = strip.rail().ok_or(StripError::Disposed)?;
        let segments = rail.segments();
        let window = window.clamp(1, segments);

        let morph_targets: Vec<_> = (0..=segments)
            .map(|offset| slice_window(rail, offset, window))
            .collect();

        let tracks = (0..=segments)
            .map(|offset| {
                let times = (0..=segments)
                    .map(|j| T::ratio(j, segments) * duration)
                    .collect();
                let values = (0..=segments)
                    .map(|j| if j == offset { T::one() } else { T::zero() })
                    .collect();
                KeyframeTrack::new(offset, times, values, Interpolation::Discrete)
            })
            .collect();

        let uvs = strip.uv().map(|uv| {
            (0..window)
                .flat_map(|i| {
                    let a = uv(i, window, i, window);
                    let b = uv(i + 1, window, i + 1, window);
                    [
                        Vector2::new(a[0], a[1]),
                        Vector2::new(a[2], a[3]),
                        Vector2::new(b[0], b[1]),
                        Vector2::new(b[0], b[1]),
                        Vector2::new(a[2], a[3]),
                        Vector2::new(b[2], b[3]),
                    ]
                })
                .collect()
        });

        log::debug!(
            "built rail animation: {} targets of {} segments over {} rail segments",
            morph_targets.len(),
            window,
            segments
        );

        let first = &morph_targets[0];
        Ok(Self {
            window,
            duration,
            points: first.points().to_vec(),
            normals: first.normals().to_vec(),
            uvs,
            clip: AnimationClip::new(duration, tracks),
            morph_targets,
        })
    }

    /// Segment count of the moving strip, after clamping
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn duration(&self) -> T {
        self.duration
    }

    /// Base positions (the window at offset `0`)
    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    pub fn uvs(&self) -> Option<&[Vector2<T>]> {
        self.uvs.as_deref()
    }

    /// One target per rail offset
    pub fn morph_targets(&self) -> &[MorphTarget<T>] {
        &self.morph_targets
    }

    pub fn clip(&self) -> &AnimationClip<T> {
        &self.clip
    }
}

/// Copy the window of `window` segments starting at `offset`, split in a head part up to the rail
/// end and a tail part restarting from the rail start
fn slice_window<T: FloatingPoint>(
    rail: &RailSamples<T>,
    offset: usize,
    window: usize,
) -> MorphTarget<T> {
    let segments = rail.segments();
    let end = offset + window;
    let head = offset..end.min(segments);
    let tail = 0..end.saturating_sub(segments);

    let mut points = Vec::with_capacity(6 * window);
    let mut normals = Vec::with_capacity(6 * window);
    for k in head.chain(tail) {
        let [a0, a1] = rail.handles()[k];
        let [b0, b1] = rail.handles()[k + 1];
        points.extend([a0, a1, b0, b0, a1, b1]);

        let (na, nb) = (rail.normals()[k], rail.normals()[k + 1]);
        normals.extend([na, na, nb, nb, na, nb]);
    }
    MorphTarget::new(points, normals)
}
