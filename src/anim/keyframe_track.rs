use crate::misc::FloatingPoint;

/// How a track is sampled between keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Hold the value of the previous keyframe
    Discrete,
    Linear,
}

/// Keyframes driving the influence of one morph target
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyframeTrack<T: FloatingPoint> {
    target: usize,
    times: Vec<T>,
    values: Vec<T>,
    interpolation: Interpolation,
}

impl<T: FloatingPoint> KeyframeTrack<T> {
    pub fn new(target: usize, times: Vec<T>, values: Vec<T>, interpolation: Interpolation) -> Self {
        Self {
            target,
            times,
            values,
            interpolation,
        }
    }

    /// Index of the morph target the track drives
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Sample the track at `time`, clamped to the keyframe range
    pub fn sample(&self, time: T) -> T {
        let Some(first) = self.times.first() else {
            return T::zero();
        };
        if time <= *first {
            return self.values[0];
        }
        let next = self.times.partition_point(|t| *t <= time);
        if next >= self.times.len() {
            return self.values[self.values.len() - 1];
        }
        let prev = next - 1;
        match self.interpolation {
            Interpolation::Discrete => self.values[prev],
            Interpolation::Linear => {
                let (t0, t1) = (self.times[prev], self.times[next]);
                let s = (time - t0) / (t1 - t0);
                self.values[prev] + (self.values[next] - self.values[prev]) * s
            }
        }
    }
}

/// A set of tracks played over `duration` seconds
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationClip<T: FloatingPoint> {
    duration: T,
    tracks: Vec<KeyframeTrack<T>>,
}

impl<T: FloatingPoint> AnimationClip<T> {
    pub fn new(duration: T, tracks: Vec<KeyframeTrack<T>>) -> Self {
        Self { duration, tracks }
    }

    pub fn duration(&self) -> T {
        self.duration
    }

    pub fn tracks(&self) -> &[KeyframeTrack<T>] {
        &self.tracks
    }

    /// Influence of every morph target at `time`
    pub fn influences(&self, time: T) -> Vec<T> {
        self.tracks.iter().map(|t| t.sample(time)).collect()
    }
}
