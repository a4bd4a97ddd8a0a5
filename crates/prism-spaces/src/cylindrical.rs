//! Polar coordinate helpers for the cylindrical (hue-bearing) spaces.
//!
//! The LCh-family spaces are polar views of a rectangular opponent-channel
//! space: chroma is the magnitude of the two opponent channels, hue their
//! angle in degrees. These helpers implement both directions with the
//! toolkit's degenerate-case policies:
//!
//! - Hue is public in degrees, wrapped into `[0, 360)`; radians appear only
//!   at the trigonometric call sites.
//! - Negative chroma can only arrive from direct user input; it is clamped
//!   to zero on the way to rectangular form, never treated as an error.
//! - Whether a hue is *meaningful* is decided by [`is_achromatic`]: the
//!   magnitudes are rounded at the default display precision first, so
//!   noise from a trigonometric round trip collapses to zero instead of
//!   fabricating a hue for a gray.

use prism_core::{Channel, Coords, DEFAULT_PRECISION, util};

/// Chroma below this, after display-precision rounding, has no meaningful
/// hue.
pub const ACHROMATIC_THRESHOLD: f64 = 1e-11;

/// Rectangular opponent channels to (chroma, hue-in-degrees).
#[inline]
pub fn rect_to_polar(a: f64, b: f64) -> (f64, f64) {
    let chroma = a.hypot(b);
    let hue = util::constrain_angle(b.atan2(a).to_degrees());
    (chroma, hue)
}

/// (chroma, hue-in-degrees) to rectangular opponent channels.
///
/// Negative chroma is silently clamped to zero.
#[inline]
pub fn polar_to_rect(chroma: f64, hue: f64) -> (f64, f64) {
    let chroma = chroma.max(0.0);
    let radians = hue.to_radians();
    (chroma * radians.cos(), chroma * radians.sin())
}

/// Whether every chroma-like magnitude rounds to zero at display precision.
#[inline]
pub fn is_achromatic(magnitudes: &[f64]) -> bool {
    magnitudes
        .iter()
        .all(|m| util::round_half_up(*m, DEFAULT_PRECISION).abs() < ACHROMATIC_THRESHOLD)
}

/// Normalize hook shared by the LCh-family spaces (`[l, c, h]` layout):
/// marks the hue undefined when the chroma is achromatic.
pub(crate) fn normalize_lch(coords: &mut Coords) {
    if is_achromatic(&[coords[1].resolve(0.0)]) {
        coords[2] = Channel::Undefined;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polar_roundtrip() {
        let (a, b) = (-0.034, 0.184);
        let (c, h) = rect_to_polar(a, b);
        let (a2, b2) = polar_to_rect(c, h);
        assert_relative_eq!(a, a2, epsilon = 1e-14);
        assert_relative_eq!(b, b2, epsilon = 1e-14);
    }

    #[test]
    fn test_hue_wrapped() {
        // Fourth quadrant comes back as a positive angle.
        let (_, h) = rect_to_polar(0.5, -0.5);
        assert_relative_eq!(h, 315.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_chroma_clamps() {
        assert_eq!(polar_to_rect(-5.0, 20.0), (0.0, 0.0));
    }

    #[test]
    fn test_achromatic_rounding() {
        // Trigonometric noise rounds away; real chroma does not.
        assert!(is_achromatic(&[1.0e-17]));
        assert!(is_achromatic(&[0.0, -3.0e-13]));
        assert!(!is_achromatic(&[0.001]));
        assert!(!is_achromatic(&[0.0001]));
    }
}
