use std::{fmt, sync::Arc};

use crate::misc::FloatingPoint;

/// Per-sample scalar such as a strip radius or a tilt angle.
///
/// Evaluated as `f(i, n)` where `i` is the sample index in `0..=n` and `n` the segment count.
#[derive(Clone)]
pub enum ScalarFn<T> {
    Constant(T),
    Varying(Arc<dyn Fn(usize, usize) -> T + Send + Sync>),
}

impl<T: FloatingPoint> ScalarFn<T> {
    pub fn varying<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Send + Sync + 'static,
    {
        Self::Varying(Arc::new(f))
    }

    pub fn evaluate(&self, i: usize, n: usize) -> T {
        match self {
            Self::Constant(v) => *v,
            Self::Varying(f) => f(i, n),
        }
    }
}

impl<T: FloatingPoint> From<T> for ScalarFn<T> {
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ScalarFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Varying(_) => f.write_str("Varying(..)"),
        }
    }
}

/// Texture coordinates `[u0, v0, u1, v1]` of the +binormal and -binormal handles at a sample.
///
/// Called as `f(i, n, j, m)`: rail sample `i` of `n` segments, and run-local sample `j` of `m`.
pub type UvFn<T> = Arc<dyn Fn(usize, usize, usize, usize) -> [T; 4] + Send + Sync>;
