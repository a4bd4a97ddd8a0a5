//! HSV, the hue/saturation/value view of sRGB, defined against HSL.
//!
//! Coordinates are `[hue, saturation, value]` with hue in degrees and the
//! other two in `[0, 1]`.

use crate::descriptor::{ChannelDef, SpaceDescriptor};
use crate::hsl::normalize_hue_sat;
use prism_core::{ChannelBound, Space};
use prism_math::White;

/// HSV to HSL.
pub(crate) fn hsv_to_hsl(v: &[f64; 3]) -> [f64; 3] {
    let [h, s, value] = *v;
    let l = value * (1.0 - s / 2.0);
    let sl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (value - l) / l.min(1.0 - l)
    };
    [h, sl, l]
}

/// HSL to HSV.
pub(crate) fn hsl_to_hsv(v: &[f64; 3]) -> [f64; 3] {
    let [h, s, l] = *v;
    let value = l + s * l.min(1.0 - l);
    let sv = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - l / value)
    };
    [h, sv, value]
}

/// HSV view of sRGB.
pub(crate) static HSV: SpaceDescriptor = SpaceDescriptor {
    space: Space::Hsv,
    name: "hsv",
    serialize: "--hsv",
    channels: [
        ChannelDef::new("hue", ChannelBound::angle()),
        ChannelDef::new("saturation", ChannelBound::percent(0.0, 1.0)),
        ChannelDef::new("value", ChannelBound::percent(0.0, 1.0)),
    ],
    white: White::D65,
    base: Some(Space::Hsl),
    to_base: hsv_to_hsl,
    from_base: hsl_to_hsv,
    normalize: normalize_hue_sat,
};
