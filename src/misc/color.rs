use std::str::FromStr;

use crate::error::StripError;

/// Linear RGB color used to tint helper geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl AxisColor {
    pub const RED: Self = Self::new(1., 0., 0.);
    pub const GREEN: Self = Self::new(0., 1., 0.);
    pub const BLUE: Self = Self::new(0., 0., 1.);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.;
        Self::new(channel(16), channel(8), channel(0))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<u32> for AxisColor {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl From<[f32; 3]> for AxisColor {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Parse `#rrggbb` (the leading `#` is optional)
impl FromStr for AxisColor {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(StripError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| StripError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_string() {
        let c: AxisColor = "#ff0000".parse().unwrap();
        assert_eq!(c, AxisColor::RED);
        let c: AxisColor = "00ff00".parse().unwrap();
        assert_eq!(c, AxisColor::GREEN);
        assert_eq!(AxisColor::from(0x0000ff), AxisColor::BLUE);
    }

    #[test]
    fn reject_malformed_string() {
        assert!("#ff00".parse::<AxisColor>().is_err());
        assert!("#gg0000".parse::<AxisColor>().is_err());
    }
}
