//! HWB, the hue/whiteness/blackness view of sRGB, defined against HSV.
//!
//! Coordinates are `[hue, whiteness, blackness]` with hue in degrees and
//! the other two in `[0, 1]`. When whiteness and blackness sum to one or
//! more the color is a pure gray and the hue is meaningless.

use crate::descriptor::{ChannelDef, SpaceDescriptor};
use prism_core::{Channel, ChannelBound, Coords, Space};
use prism_math::White;

/// HWB to HSV.
pub(crate) fn hwb_to_hsv(v: &[f64; 3]) -> [f64; 3] {
    let [h, w, b] = *v;
    if w + b >= 1.0 {
        // Achromatic: the w/b ratio picks the gray level.
        let gray = w / (w + b);
        return [h, 0.0, gray];
    }
    let value = 1.0 - b;
    let s = if value == 0.0 { 0.0 } else { 1.0 - w / value };
    [h, s, value]
}

/// HSV to HWB.
pub(crate) fn hsv_to_hwb(v: &[f64; 3]) -> [f64; 3] {
    let [h, s, value] = *v;
    [h, (1.0 - s) * value, 1.0 - value]
}

fn normalize_hwb(coords: &mut Coords) {
    if coords[1].resolve(0.0) + coords[2].resolve(0.0) >= 1.0 {
        coords[0] = Channel::Undefined;
    }
}

/// HWB view of sRGB.
pub(crate) static HWB: SpaceDescriptor = SpaceDescriptor {
    space: Space::Hwb,
    name: "hwb",
    serialize: "--hwb",
    channels: [
        ChannelDef::new("hue", ChannelBound::angle()),
        ChannelDef::new("whiteness", ChannelBound::percent(0.0, 1.0)),
        ChannelDef::new("blackness", ChannelBound::percent(0.0, 1.0)),
    ],
    white: White::D65,
    base: Some(Space::Hsv),
    to_base: hwb_to_hsv,
    from_base: hsv_to_hwb,
    normalize: normalize_hwb,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip() {
        let cases = [[20.0, 0.1, 0.2], [200.0, 0.4, 0.3], [340.0, 0.0, 0.0]];
        for hwb in cases {
            let back = hsv_to_hwb(&hwb_to_hsv(&hwb));
            assert_relative_eq!(back[0], hwb[0], epsilon = 1e-10);
            assert_relative_eq!(back[1], hwb[1], epsilon = 1e-10);
            assert_relative_eq!(back[2], hwb[2], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_gray_collapse() {
        // w + b >= 1 renders as gray regardless of hue.
        let hsv = hwb_to_hsv(&[120.0, 0.6, 0.6]);
        assert_eq!(hsv[1], 0.0);
        assert_relative_eq!(hsv[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_white_and_black() {
        assert_eq!(hwb_to_hsv(&[0.0, 1.0, 0.0])[2], 1.0);
        let black = hwb_to_hsv(&[0.0, 0.0, 1.0]);
        assert_eq!(black[2], 0.0);
    }
}
