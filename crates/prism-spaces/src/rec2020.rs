//! Rec. 2020 and its linear-light form.

use crate::descriptor::{ChannelDef, SpaceDescriptor, no_normalize};
use crate::rgb::{self, Primaries, RgbMatrices};
use crate::transfer::{map3, rec2020};
use prism_core::{ChannelBound, Space};
use prism_math::White;
use std::sync::OnceLock;

pub(crate) const PRIMARIES: Primaries = Primaries {
    r: (0.708, 0.292),
    g: (0.170, 0.797),
    b: (0.131, 0.046),
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
    map3(rec2020::eotf, v)
}

fn encode(v: &[f64; 3]) -> [f64; 3] {
    map3(rec2020::oetf, v)
}

const RGB_CHANNELS: [ChannelDef; 3] = [
    ChannelDef::new("red", ChannelBound::bounded(0.0, 1.0)),
    ChannelDef::new("green", ChannelBound::bounded(0.0, 1.0)),
    ChannelDef::new("blue", ChannelBound::bounded(0.0, 1.0)),
];

/// Gamma-encoded Rec. 2020.
pub(crate) static REC2020: SpaceDescriptor = SpaceDescriptor {
    space: Space::Rec2020,
    name: "rec2020",
    serialize: "rec2020",
    channels: RGB_CHANNELS,
    white: White::D65,
    base: Some(Space::Rec2020Linear),
    to_base: decode,
    from_base: encode,
    normalize: no_normalize,
};

/// Linear-light Rec. 2020.
pub(crate) static REC2020_LINEAR: SpaceDescriptor = SpaceDescriptor {
    space: Space::Rec2020Linear,
    name: "rec2020-linear",
    serialize: "--rec2020-linear",
    channels: RGB_CHANNELS,
    white: White::D65,
    base: Some(Space::XyzD65),
    to_base: linear_to_xyz,
    from_base: xyz_to_linear,
    normalize: no_normalize,
};
