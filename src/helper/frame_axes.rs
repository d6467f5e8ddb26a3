use nalgebra::Point3;

use crate::{
    curve::Curve3D,
    error::StripError,
    misc::{AxisColor, FloatingPoint},
    strip::Strip,
};

/// Line segments visualizing the frame of every rail sample:
/// binormal (x), normal (y) and tangent (z), each starting at the sample point.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAxes<T: FloatingPoint> {
    state: AxesState<T>,
}

#[derive(Debug, Clone, PartialEq)]
enum AxesState<T: FloatingPoint> {
    Active {
        length: T,
        colors: [AxisColor; 3],
        points: Vec<Point3<T>>,
        colors_buffer: Vec<AxisColor>,
    },
    Disposed,
}

impl<T: FloatingPoint> FrameAxes<T> {
    /// Axes of `length` with the default red/green/blue colors
    /// # Failures
    /// - if the strip has been disposed
    pub fn try_new<C: Curve3D<T>>(strip: &Strip<T, C>, length: T) -> Result<Self, StripError> {
        Self::try_with_colors(
            strip,
            length,
            [AxisColor::RED, AxisColor::GREEN, AxisColor::BLUE],
        )
    }

    pub fn try_with_colors<C: Curve3D<T>>(
        strip: &Strip<T, C>,
        length: T,
        colors: [AxisColor; 3],
    ) -> Result<Self, StripError> {
        strip.ensure_active()?;
        let mut axes = Self {
            state: AxesState::Active {
                length,
                colors,
                points: vec![],
                colors_buffer: vec![],
            },
        };
        axes.update(strip);
        Ok(axes)
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.state, AxesState::Disposed)
    }

    pub fn length(&self) -> Option<T> {
        match &self.state {
            AxesState::Active { length, .. } => Some(*length),
            AxesState::Disposed => None,
        }
    }

    pub fn colors(&self) -> Option<[AxisColor; 3]> {
        match &self.state {
            AxesState::Active { colors, .. } => Some(*colors),
            AxesState::Disposed => None,
        }
    }

    /// Line segment end points, two per axis, six per frame
    pub fn points(&self) -> &[Point3<T>] {
        match &self.state {
            AxesState::Active { points, .. } => points,
            AxesState::Disposed => &[],
        }
    }

    /// Per-vertex colors matching [`FrameAxes::points`]
    pub fn vertex_colors(&self) -> &[AxisColor] {
        match &self.state {
            AxesState::Active { colors_buffer, .. } => colors_buffer,
            AxesState::Disposed => &[],
        }
    }

    /// Change the axis length and rebuild against `strip`
    pub fn set_length<C: Curve3D<T>>(&mut self, strip: &Strip<T, C>, value: T) {
        if let AxesState::Active { length, .. } = &mut self.state {
            if *length != value {
                *length = value;
                self.update(strip);
            }
        }
    }

    /// Change any of the axis colors; nothing is rebuilt when they are unchanged
    pub fn set_colors<C: Curve3D<T>>(
        &mut self,
        strip: &Strip<T, C>,
        x: Option<AxisColor>,
        y: Option<AxisColor>,
        z: Option<AxisColor>,
    ) {
        if let AxesState::Active { colors, .. } = &mut self.state {
            let next = [x.unwrap_or(colors[0]), y.unwrap_or(colors[1]), z.unwrap_or(colors[2])];
            if next != *colors {
                *colors = next;
                self.update(strip);
            }
        }
    }

    /// Sync with the frames of `strip`; a disposed strip leaves the buffers empty
    pub fn update<C: Curve3D<T>>(&mut self, strip: &Strip<T, C>) {
        let AxesState::Active {
            length,
            colors,
            points,
            colors_buffer,
        } = &mut self.state
        else {
            return;
        };
        points.clear();
        colors_buffer.clear();

        let Some(frames) = strip.frames() else {
            log::trace!("frame axes synced with a disposed strip");
            return;
        };

        for frame in frames {
            let o = *frame.position();
            for (axis, color) in [frame.binormal(), frame.normal(), frame.tangent()]
                .into_iter()
                .zip(colors.iter())
            {
                points.push(o);
                points.push(o + axis * *length);
                colors_buffer.push(*color);
                colors_buffer.push(*color);
            }
        }
    }

    /// Release buffers. Calling it again does nothing.
    pub fn dispose(&mut self) {
        self.state = AxesState::Disposed;
    }
}
