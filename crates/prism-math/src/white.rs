//! Standard reference white points.
//!
//! A color space declares the white point its coordinates are relative to.
//! When a conversion crosses spaces with different whites, the engine runs a
//! chromatic adaptation transform between these tristimulus values (see
//! [`crate::adapt`](crate::AdaptationCache)).
//!
//! White points are specified as CIE xy chromaticities and expanded to XYZ
//! with Y = 1 on demand, so every consumer derives the identical
//! tristimulus values.

use crate::Vec3;

/// Converts an xy chromaticity to XYZ tristimulus with Y = 1.
///
/// Returns [`Vec3::ZERO`] for a degenerate chromaticity with y = 0; the
/// adaptation layer rejects such a white with an error rather than dividing
/// by zero here.
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// A standard illuminant usable as a color space's reference white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum White {
    /// CIE Standard Illuminant D50 (~5000K), the ICC/print reference.
    D50,
    /// CIE Standard Illuminant D65 (~6500K), the sRGB/display reference
    /// and the white of the conversion anchor.
    D65,
}

impl White {
    /// CIE xy chromaticity coordinates of the illuminant.
    pub const fn chromaticity(self) -> (f64, f64) {
        match self {
            Self::D50 => (0.3457, 0.3585),
            Self::D65 => (0.3127, 0.3290),
        }
    }

    /// XYZ tristimulus values with Y = 1.
    #[inline]
    pub fn xyz(self) -> Vec3 {
        let (x, y) = self.chromaticity();
        xy_to_xyz(x, y)
    }

    /// Illuminant name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D50 => "D50",
            Self::D65 => "D65",
        }
    }
}
