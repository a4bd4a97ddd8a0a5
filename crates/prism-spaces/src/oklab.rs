//! Oklab and its polar form OkLCh, both in the D65 frame.
//!
//! The rectangular transform goes through the Oklab LMS cone space: two
//! fixed matrices with a cube/cube-root nonlinearity between them. The
//! matrices are the reference 64-bit constants; deriving them is outside
//! the scope of a conversion toolkit.

use crate::cylindrical::{normalize_lch, polar_to_rect, rect_to_polar};
use crate::descriptor::{ChannelDef, SpaceDescriptor, no_normalize};
use prism_core::{ChannelBound, Space};
use prism_math::{Mat3, Vec3, White};

#[rustfmt::skip]
const XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434,  0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308,  0.6335478284694309],
]);

#[rustfmt::skip]
const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542683093140,  0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799,  0.4505937096174110],
    [0.0259040424655478,  0.7827717124575296, -0.8086757549230774],
]);

#[rustfmt::skip]
const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0000000000000000,  0.3963377773761749,  0.2158037573099136],
    [1.0000000000000000, -0.1055613458156586, -0.0638541728258133],
    [1.0000000000000000, -0.0894841775298119, -1.2914855480194092],
]);

#[rustfmt::skip]
const LMS_TO_XYZ: Mat3 = Mat3::from_rows([
    [ 1.2268798758459243, -0.5578149944602171,  0.2813910456659647],
    [-0.0405757452148008,  1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432,  1.5869240198367816],
]);

/// Oklab to XYZ D65.
pub(crate) fn oklab_to_xyz_d65(v: &[f64; 3]) -> [f64; 3] {
    let lms = OKLAB_TO_LMS * Vec3::from_array(*v);
    let cubed = Vec3::new(lms.x.powi(3), lms.y.powi(3), lms.z.powi(3));
    (LMS_TO_XYZ * cubed).to_array()
}

/// XYZ D65 to Oklab.
pub(crate) fn xyz_d65_to_oklab(v: &[f64; 3]) -> [f64; 3] {
    let lms = XYZ_TO_LMS * Vec3::from_array(*v);
    let roots = Vec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    (LMS_TO_OKLAB * roots).to_array()
}

/// OkLCh to Oklab.
pub(crate) fn oklch_to_oklab(v: &[f64; 3]) -> [f64; 3] {
    let (a, b) = polar_to_rect(v[1], v[2]);
    [v[0], a, b]
}

/// Oklab to OkLCh.
pub(crate) fn oklab_to_oklch(v: &[f64; 3]) -> [f64; 3] {
    let (c, h) = rect_to_polar(v[1], v[2]);
    [v[0], c, h]
}

/// Oklab (D65).
pub(crate) static OKLAB: SpaceDescriptor = SpaceDescriptor {
    space: Space::Oklab,
    name: "oklab",
    serialize: "oklab",
    channels: [
        ChannelDef::new("lightness", ChannelBound::unbounded_percent(0.0, 1.0)),
        ChannelDef::new("a", ChannelBound::unbounded(-0.4, 0.4)),
        ChannelDef::new("b", ChannelBound::unbounded(-0.4, 0.4)),
    ],
    white: White::D65,
    base: Some(Space::XyzD65),
    to_base: oklab_to_xyz_d65,
    from_base: xyz_d65_to_oklab,
    normalize: no_normalize,
};

/// OkLCh (D65).
pub(crate) static OKLCH: SpaceDescriptor = SpaceDescriptor {
    space: Space::Oklch,
    name: "oklch",
    serialize: "oklch",
    channels: [
        ChannelDef::new("lightness", ChannelBound::unbounded_percent(0.0, 1.0)),
        ChannelDef::new("chroma", ChannelBound::unbounded(0.0, 0.4)),
        ChannelDef::new("hue", ChannelBound::angle()),
    ],
    white: White::D65,
    base: Some(Space::Oklab),
    to_base: oklch_to_oklab,
    from_base: oklab_to_oklch,
    normalize: normalize_lch,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_d65_white_is_l1() {
        let w = White::D65.xyz().to_array();
        let oklab = xyz_d65_to_oklab(&w);
        assert_relative_eq!(oklab[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(oklab[1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(oklab[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip_through_xyz() {
        let cases = [[0.5, 0.1, -0.08], [0.86, 0.0017, 0.176], [0.2, -0.02, 0.03]];
        for oklab in cases {
            let back = xyz_d65_to_oklab(&oklab_to_xyz_d65(&oklab));
            for i in 0..3 {
                assert_relative_eq!(back[i], oklab[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_polar_roundtrip() {
        let oklch = [0.59, 0.186, 259.66];
        let back = oklab_to_oklch(&oklch_to_oklab(&oklch));
        for i in 0..3 {
            assert_relative_eq!(back[i], oklch[i], epsilon = 1e-10);
        }
    }
}
