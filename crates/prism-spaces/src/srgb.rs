//! sRGB and linear-light sRGB.

use crate::descriptor::{ChannelDef, SpaceDescriptor, no_normalize};
use crate::rgb::{self, Primaries, RgbMatrices};
use crate::transfer::{map3, srgb};
use prism_core::{ChannelBound, Space};
use prism_math::White;
use std::sync::OnceLock;

pub(crate) const PRIMARIES: Primaries = Primaries {
    r: (0.640, 0.330),
    g: (0.300, 0.600),
    b: (0.150, 0.060),
    white: White::D65,
};

static MATRICES: OnceLock<RgbMatrices> = OnceLock::new();

fn linear_to_xyz(v: &[f64; 3]) -> [f64; 3] {
    rgb::linear_to_xyz(&MATRICES, &PRIMARIES, v)
}

fn xyz_to_linear(v: &[f64; 3]) -> [f64; 3] {
    rgb::xyz_to_linear(&MATRICES, &PRIMARIES, v)
}

fn decode(v: &[f64; 3]) -> [f64; 3] {
    map3(srgb::eotf, v)
}

fn encode(v: &[f64; 3]) -> [f64; 3] {
    map3(srgb::oetf, v)
}

const RGB_CHANNELS: [ChannelDef; 3] = [
    ChannelDef::new("red", ChannelBound::bounded(0.0, 1.0)),
    ChannelDef::new("green", ChannelBound::bounded(0.0, 1.0)),
    ChannelDef::new("blue", ChannelBound::bounded(0.0, 1.0)),
];

/// Gamma-encoded sRGB.
pub(crate) static SRGB: SpaceDescriptor = SpaceDescriptor {
    space: Space::Srgb,
    name: "srgb",
    serialize: "srgb",
    channels: RGB_CHANNELS,
    white: White::D65,
    base: Some(Space::SrgbLinear),
    to_base: decode,
    from_base: encode,
    normalize: no_normalize,
};

/// Linear-light sRGB.
pub(crate) static SRGB_LINEAR: SpaceDescriptor = SpaceDescriptor {
    space: Space::SrgbLinear,
    name: "srgb-linear",
    serialize: "srgb-linear",
    channels: RGB_CHANNELS,
    white: White::D65,
    base: Some(Space::XyzD65),
    to_base: linear_to_xyz,
    from_base: xyz_to_linear,
    normalize: no_normalize,
};
