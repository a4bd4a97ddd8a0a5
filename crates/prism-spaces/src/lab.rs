//! CIE Lab and its polar form LCh, both in the D50 frame.
//!
//! Lightness runs 0-100; the opponent axes are unbounded with a documented
//! working range of roughly +/-160. None of these limits are enforced
//! anywhere - the spaces have no gamut to fit.

use crate::cylindrical::{normalize_lch, polar_to_rect, rect_to_polar};
use crate::descriptor::{ChannelDef, SpaceDescriptor, no_normalize};
use prism_core::{ChannelBound, Space};
use prism_math::White;

/// CIE kappa constant, 24389/27.
pub(crate) const KAPPA: f64 = 24389.0 / 27.0;
/// CIE epsilon constant, 216/24389.
pub(crate) const EPSILON: f64 = 216.0 / 24389.0;

/// Lab to XYZ D50.
pub(crate) fn lab_to_xyz_d50(v: &[f64; 3]) -> [f64; 3] {
    let [l, a, b] = *v;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = if fx.powi(3) > EPSILON {
        fx.powi(3)
    } else {
        (116.0 * fx - 16.0) / KAPPA
    };
    let y = if l > KAPPA * EPSILON {
        fy.powi(3)
    } else {
        l / KAPPA
    };
    let z = if fz.powi(3) > EPSILON {
        fz.powi(3)
    } else {
        (116.0 * fz - 16.0) / KAPPA
    };

    let w = White::D50.xyz();
    [x * w.x, y * w.y, z * w.z]
}

/// XYZ D50 to Lab.
pub(crate) fn xyz_d50_to_lab(v: &[f64; 3]) -> [f64; 3] {
    let w = White::D50.xyz();
    let xr = v[0] / w.x;
    let yr = v[1] / w.y;
    let zr = v[2] / w.z;

    let f = |t: f64| {
        if t > EPSILON {
            t.cbrt()
        } else {
            (KAPPA * t + 16.0) / 116.0
        }
    };
    let (fx, fy, fz) = (f(xr), f(yr), f(zr));

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// LCh to Lab.
pub(crate) fn lch_to_lab(v: &[f64; 3]) -> [f64; 3] {
    let (a, b) = polar_to_rect(v[1], v[2]);
    [v[0], a, b]
}

/// Lab to LCh.
pub(crate) fn lab_to_lch(v: &[f64; 3]) -> [f64; 3] {
    let (c, h) = rect_to_polar(v[1], v[2]);
    [v[0], c, h]
}

/// CIE Lab (D50).
pub(crate) static LAB: SpaceDescriptor = SpaceDescriptor {
    space: Space::Lab,
    name: "lab",
    serialize: "lab",
    channels: [
        ChannelDef::new("lightness", ChannelBound::unbounded_percent(0.0, 100.0)),
        ChannelDef::new("a", ChannelBound::unbounded(-160.0, 160.0)),
        ChannelDef::new("b", ChannelBound::unbounded(-160.0, 160.0)),
    ],
    white: White::D50,
    base: Some(Space::XyzD50),
    to_base: lab_to_xyz_d50,
    from_base: xyz_d50_to_lab,
    normalize: no_normalize,
};

/// CIE LCh (D50).
pub(crate) static LCH: SpaceDescriptor = SpaceDescriptor {
    space: Space::Lch,
    name: "lch",
    serialize: "lch",
    channels: [
        ChannelDef::new("lightness", ChannelBound::unbounded_percent(0.0, 100.0)),
        ChannelDef::new("chroma", ChannelBound::unbounded(0.0, 150.0)),
        ChannelDef::new("hue", ChannelBound::angle()),
    ],
    white: White::D50,
    base: Some(Space::Lab),
    to_base: lch_to_lab,
    from_base: lab_to_lch,
    normalize: normalize_lch,
};
