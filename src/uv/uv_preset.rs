use std::sync::Arc;

use crate::misc::{FloatingPoint, UvFn};

/// One of the four fixed texture layouts, parametrized by a normalized position `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLayout {
    /// `[0, x, 1, x]`: u across the strip, v along it
    Along,
    /// `[x, 1, x, 0]`: u along the strip, v across it
    Across,
    /// `[1, 1-x, 0, 1-x]`: `Along` rotated by half a turn
    AlongFlipped,
    /// `[1-x, 0, 1-x, 1]`: `Across` rotated by half a turn
    AcrossFlipped,
}

impl UvLayout {
    pub const ALL: [UvLayout; 4] = [
        UvLayout::Along,
        UvLayout::Across,
        UvLayout::AlongFlipped,
        UvLayout::AcrossFlipped,
    ];

    /// Texture coordinates of the two handles at normalized position `x`
    pub fn at<T: FloatingPoint>(&self, x: T) -> [T; 4] {
        let (zero, one) = (T::zero(), T::one());
        match self {
            UvLayout::Along => [zero, x, one, x],
            UvLayout::Across => [x, one, x, zero],
            UvLayout::AlongFlipped => [one, one - x, zero, one - x],
            UvLayout::AcrossFlipped => [one - x, zero, one - x, one],
        }
    }
}

/// Ready-made uv functions
pub struct UvPreset;

impl UvPreset {
    /// Map the whole rail onto the texture: `x = i / n`.
    /// Dashes show the slice of the texture under them.
    pub fn rail<T: FloatingPoint>(layout: UvLayout) -> UvFn<T> {
        Arc::new(move |i: usize, n: usize, _: usize, _: usize| {
            layout.at(T::ratio(i, n))
        })
    }

    /// Map the texture onto every run separately: `x = j / m`.
    pub fn dash<T: FloatingPoint>(layout: UvLayout) -> UvFn<T> {
        Arc::new(move |_: usize, _: usize, j: usize, m: usize| {
            layout.at(T::ratio(j, m))
        })
    }
}
