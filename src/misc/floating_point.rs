use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert a sample index (or count) into the scalar type
    fn from_index(i: usize) -> Self {
        nalgebra::convert(i as f64)
    }

    /// Ratio `i / n` used to map a sample index onto the curve domain `[0, 1]`
    fn ratio(i: usize, n: usize) -> Self {
        Self::from_index(i) / Self::from_index(n)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
