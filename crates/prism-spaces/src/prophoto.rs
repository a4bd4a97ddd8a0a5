//! ProPhoto RGB and its linear-light form.
//!
//! The one RGB branch with a D50 frame: the linear space declares
//! `xyz-d50` as its base, so converting to the anchor crosses a white
//! boundary and exercises chromatic adaptation.

use crate::descriptor::{ChannelDef, SpaceDescriptor, no_normalize};
use crate::rgb::{self, Primaries, RgbMatrices};
use crate::transfer::{map3, prophoto};
use prism_core::{ChannelBound, Space};
use prism_math::White;
use std::sync::OnceLock;

pub(crate) const PRIMARIES: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    white: White::D50,
};

static MATRICES: OnceLock<RgbMatrices> = OnceLock::new();

fn linear_to_xyz(v: &[f64; 3]) -> [f64; 3] {
    rgb::linear_to_xyz(&MATRICES, &PRIMARIES, v)
}

fn xyz_to_linear(v: &[f64; 3]) -> [f64; 3] {
    rgb::xyz_to_linear(&MATRICES, &PRIMARIES, v)
}

fn decode(v: &[f64; 3]) -> [f64; 3] {
    map3(prophoto::eotf, v)
}

fn encode(v: &[f64; 3]) -> [f64; 3] {
    map3(prophoto::oetf, v)
}

const RGB_CHANNELS: [ChannelDef; 3] = [
    ChannelDef::new("red", ChannelBound::bounded(0.0, 1.0)),
    ChannelDef::new("green", ChannelBound::bounded(0.0, 1.0)),
    ChannelDef::new("blue", ChannelBound::bounded(0.0, 1.0)),
];

/// Gamma-encoded ProPhoto RGB.
pub(crate) static PROPHOTO: SpaceDescriptor = SpaceDescriptor {
    space: Space::ProPhotoRgb,
    name: "prophoto-rgb",
    serialize: "prophoto-rgb",
    channels: RGB_CHANNELS,
    white: White::D50,
    base: Some(Space::ProPhotoRgbLinear),
    to_base: decode,
    from_base: encode,
    normalize: no_normalize,
};

/// Linear-light ProPhoto RGB, based on XYZ D50.
pub(crate) static PROPHOTO_LINEAR: SpaceDescriptor = SpaceDescriptor {
    space: Space::ProPhotoRgbLinear,
    name: "prophoto-rgb-linear",
    serialize: "--prophoto-rgb-linear",
    channels: RGB_CHANNELS,
    white: White::D50,
    base: Some(Space::XyzD50),
    to_base: linear_to_xyz,
    from_base: xyz_to_linear,
    normalize: no_normalize,
};
