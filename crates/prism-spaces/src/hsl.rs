//! HSL, the hue/saturation/lightness view of sRGB.
//!
//! Coordinates are `[hue, saturation, lightness]` with hue in degrees and
//! the other two in `[0, 1]`. A zero-saturation color has no meaningful
//! hue; the normalize hook marks it undefined. Saturation here is exact
//! arithmetic over the sRGB channels (no trigonometry), so the rule
//! triggers on exact zero rather than the rounded achromatic threshold.

use crate::descriptor::{ChannelDef, SpaceDescriptor};
use prism_core::{Channel, ChannelBound, Coords, Space, util};
use prism_math::White;

/// HSL to sRGB.
pub(crate) fn hsl_to_srgb(v: &[f64; 3]) -> [f64; 3] {
    let h = util::constrain_angle(v[0]);
    let s = v[1];
    let l = v[2];

    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let a = s * l.min(1.0 - l);
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    [f(0.0), f(8.0), f(4.0)]
}

/// sRGB to HSL.
pub(crate) fn srgb_to_hsl(v: &[f64; 3]) -> [f64; 3] {
    let [r, g, b] = *v;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    let mut h = 0.0;
    let mut s = 0.0;
    if d != 0.0 {
        s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (max - l) / l.min(1.0 - l)
        };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h *= 60.0;
    }

    [util::constrain_angle(h), s, l]
}

pub(crate) fn normalize_hue_sat(coords: &mut Coords) {
    if coords[1].resolve(0.0) == 0.0 {
        coords[0] = Channel::Undefined;
    }
}

/// HSL view of sRGB.
pub(crate) static HSL: SpaceDescriptor = SpaceDescriptor {
    space: Space::Hsl,
    name: "hsl",
    serialize: "--hsl",
    channels: [
        ChannelDef::new("hue", ChannelBound::angle()),
        ChannelDef::new("saturation", ChannelBound::percent(0.0, 1.0)),
        ChannelDef::new("lightness", ChannelBound::percent(0.0, 1.0)),
    ],
    white: White::D65,
    base: Some(Space::Srgb),
    to_base: hsl_to_srgb,
    from_base: srgb_to_hsl,
    normalize: normalize_hue_sat,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_primaries() {
        let red = hsl_to_srgb(&[0.0, 1.0, 0.5]);
        assert_eq!(red, [1.0, 0.0, 0.0]);

        let lime = hsl_to_srgb(&[120.0, 1.0, 0.5]);
        assert_eq!(lime, [0.0, 1.0, 0.0]);

        let blue = hsl_to_srgb(&[240.0, 1.0, 0.5]);
        assert_eq!(blue, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_srgb_to_hsl_known() {
        let hsl = srgb_to_hsl(&[1.0, 0.0, 0.0]);
        assert_relative_eq!(hsl[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(hsl[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(hsl[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_gray_has_zero_saturation() {
        let hsl = srgb_to_hsl(&[0.5, 0.5, 0.5]);
        assert_eq!(hsl[1], 0.0);
        assert_eq!(hsl[2], 0.5);
    }

    #[test]
    fn test_roundtrip() {
        let cases = [[20.0, 0.6, 0.3], [200.0, 0.25, 0.8], [340.0, 0.9, 0.5]];
        for hsl in cases {
            let back = srgb_to_hsl(&hsl_to_srgb(&hsl));
            assert_relative_eq!(back[0], hsl[0], epsilon = 1e-10);
            assert_relative_eq!(back[1], hsl[1], epsilon = 1e-10);
            assert_relative_eq!(back[2], hsl[2], epsilon = 1e-10);
        }
    }
}
