use nalgebra::Point3;

use crate::{
    curve::Curve3D,
    error::StripError,
    misc::{FloatingPoint, Frame, ScalarFn, UvFn},
    window::{ParsedWindow, Segments},
};

use super::{Morph, RailSamples, StripMesh, StripOutput, StripProps};

/// A ribbon following a curve.
///
/// Every mutation recomputes frames and buffers before returning.
/// Once disposed, setters are no-ops and queries return `None`.
///
/// # Example
/// ```
/// use curvo_strip::prelude::*;
/// use nalgebra::Point3;
///
/// let line = LineCurve3::try_new(Point3::origin(), Point3::new(0., 2., 0.)).unwrap();
/// let mut strip = StripBuilder::new()
///     .with_curve(line)
///     .with_segments(4)
///     .with_radius(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(strip.mesh().unwrap().vertex_count(), 10);
///
/// strip.dispose();
/// assert!(strip.mesh().is_none());
/// ```
#[derive(Debug)]
pub struct Strip<T: FloatingPoint, C> {
    state: StripState<T, C>,
}

#[derive(Debug)]
enum StripState<T: FloatingPoint, C> {
    Active(Box<ActiveStrip<T, C>>),
    Disposed,
}

#[derive(Debug)]
struct ActiveStrip<T: FloatingPoint, C> {
    props: StripProps<T, C>,
    output: StripOutput<T>,
}

impl<T: FloatingPoint, C: Curve3D<T>> Strip<T, C> {
    pub fn new(props: StripProps<T, C>) -> Self {
        let output = props.build();
        log_rebuild(&output);
        Self {
            state: StripState::Active(Box::new(ActiveStrip { props, output })),
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.state, StripState::Disposed)
    }

    /// Release props and buffers. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if !self.is_disposed() {
            log::trace!("disposing strip");
            self.state = StripState::Disposed;
        }
    }

    fn active(&self) -> Option<&ActiveStrip<T, C>> {
        match &self.state {
            StripState::Active(active) => Some(active),
            StripState::Disposed => None,
        }
    }

    /// Error out when the strip is disposed
    pub fn ensure_active(&self) -> Result<(), StripError> {
        if self.is_disposed() {
            Err(StripError::Disposed)
        } else {
            Ok(())
        }
    }

    pub fn props(&self) -> Option<&StripProps<T, C>> {
        self.active().map(|a| &a.props)
    }

    pub fn curve(&self) -> Option<&C> {
        self.props().map(|p| &p.curve)
    }

    pub fn window(&self) -> Option<&ParsedWindow> {
        self.props().map(|p| &p.window)
    }

    pub fn segments(&self) -> Option<usize> {
        self.window().map(|w| w.segments())
    }

    pub fn radius(&self) -> Option<&ScalarFn<T>> {
        self.props().map(|p| &p.radius)
    }

    pub fn tilt(&self) -> Option<&ScalarFn<T>> {
        self.props().map(|p| &p.tilt)
    }

    pub fn uv(&self) -> Option<&UvFn<T>> {
        self.props().and_then(|p| p.uv.as_ref())
    }

    pub fn morphs(&self) -> Option<&[Morph<T, C>]> {
        self.props().map(|p| p.morphs.as_slice())
    }

    pub fn mesh(&self) -> Option<&StripMesh<T>> {
        self.active().map(|a| &a.output.mesh)
    }

    /// Frames at every rail sample (`segments + 1` entries)
    pub fn frames(&self) -> Option<&[Frame<T>]> {
        self.active().map(|a| a.output.frames.as_slice())
    }

    pub fn rail(&self) -> Option<&RailSamples<T>> {
        self.active().map(|a| &a.output.rail)
    }

    /// Sample points along the curve, cloned
    pub fn points(&self) -> Option<Vec<Point3<T>>> {
        self.frames()
            .map(|frames| frames.iter().map(|f| *f.position()).collect())
    }

    pub fn set_curve(&mut self, curve: C) {
        self.modify(|props| props.curve = curve);
    }

    pub fn set_segments(&mut self, segments: impl Into<Segments>) {
        let window = ParsedWindow::parse(segments);
        self.modify(|props| props.window = window);
    }

    pub fn set_radius(&mut self, radius: impl Into<ScalarFn<T>>) {
        let radius = radius.into();
        self.modify(|props| props.radius = radius);
    }

    pub fn set_tilt(&mut self, tilt: impl Into<ScalarFn<T>>) {
        let tilt = tilt.into();
        self.modify(|props| props.tilt = tilt);
    }

    pub fn set_uv(&mut self, uv: Option<UvFn<T>>) {
        self.modify(|props| props.uv = uv);
    }

    /// Replace the morph targets; an empty list removes them
    pub fn set_morphs(&mut self, morphs: Vec<Morph<T, C>>) {
        self.modify(|props| props.morphs = morphs);
    }

    /// Apply several changes at once and recompute a single time
    pub fn modify(&mut self, f: impl FnOnce(&mut StripProps<T, C>)) {
        match &mut self.state {
            StripState::Active(active) => {
                f(&mut active.props);
                active.output = active.props.build();
                log_rebuild(&active.output);
            }
            StripState::Disposed => {
                log::trace!("ignoring mutation of a disposed strip");
            }
        }
    }
}

fn log_rebuild<T: FloatingPoint>(output: &StripOutput<T>) {
    log::debug!(
        "rebuilt strip: {} frames, {} runs, {} vertices, {} morph targets",
        output.frames.len(),
        output.mesh.runs().len(),
        output.mesh.vertex_count(),
        output.mesh.morph_targets().len()
    );
}

/// Builder of [`Strip`]; the curve is required, everything else has a default
/// (radius `0.5`, tilt `0`, one segment, no uv, no morphs).
pub struct StripBuilder<T: FloatingPoint, C> {
    curve: Option<C>,
    window: ParsedWindow,
    radius: ScalarFn<T>,
    tilt: ScalarFn<T>,
    uv: Option<UvFn<T>>,
    morphs: Vec<Morph<T, C>>,
}

impl<T: FloatingPoint, C> Default for StripBuilder<T, C> {
    fn default() -> Self {
        Self {
            curve: None,
            window: ParsedWindow::default(),
            radius: ScalarFn::Constant(nalgebra::convert(0.5)),
            tilt: ScalarFn::Constant(T::zero()),
            uv: None,
            morphs: vec![],
        }
    }
}

impl<T: FloatingPoint, C: Curve3D<T>> StripBuilder<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curve(mut self, curve: C) -> Self {
        self.curve = Some(curve);
        self
    }

    pub fn with_segments(mut self, segments: impl Into<Segments>) -> Self {
        self.window = ParsedWindow::parse(segments);
        self
    }

    pub fn with_radius(mut self, radius: impl Into<ScalarFn<T>>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn with_tilt(mut self, tilt: impl Into<ScalarFn<T>>) -> Self {
        self.tilt = tilt.into();
        self
    }

    pub fn with_uv(mut self, uv: UvFn<T>) -> Self {
        self.uv = Some(uv);
        self
    }

    pub fn with_morphs(mut self, morphs: Vec<Morph<T, C>>) -> Self {
        self.morphs = morphs;
        self
    }

    /// Build the strip
    /// # Failures
    /// - if no curve was supplied
    pub fn build(self) -> Result<Strip<T, C>, StripError> {
        let curve = self.curve.ok_or(StripError::MissingDependency("curve"))?;
        Ok(Strip::new(StripProps {
            curve,
            window: self.window,
            radius: self.radius,
            tilt: self.tilt,
            uv: self.uv,
            morphs: self.morphs,
        }))
    }
}
