//! CIE Luv and its polar form LChuv, both in the D65 frame.
//!
//! Luv shares Lab's lightness scale but builds its opponent axes from the
//! u'v' uniform chromaticity diagram, which needs the white point's own
//! u'v' coordinates as the origin.

use crate::cylindrical::{normalize_lch, polar_to_rect, rect_to_polar};
use crate::descriptor::{ChannelDef, SpaceDescriptor, no_normalize};
use crate::lab::{EPSILON, KAPPA};
use prism_core::{ChannelBound, Space};
use prism_math::{Vec3, White};

/// u'v' chromaticity of a tristimulus value; (0, 0) for black.
fn uv_prime(xyz: Vec3) -> (f64, f64) {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz.x / denom, 9.0 * xyz.y / denom)
    }
}

/// Luv to XYZ D65.
pub(crate) fn luv_to_xyz_d65(v: &[f64; 3]) -> [f64; 3] {
    let [l, u, vv] = *v;
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let (un, vn) = uv_prime(White::D65.xyz());
    let up = u / (13.0 * l) + un;
    let vp = vv / (13.0 * l) + vn;

    let y = if l > 8.0 {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    };

    if vp == 0.0 {
        return [0.0, y, 0.0];
    }

    let x = y * 9.0 * up / (4.0 * vp);
    let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
    [x, y, z]
}

/// XYZ D65 to Luv.
pub(crate) fn xyz_d65_to_luv(v: &[f64; 3]) -> [f64; 3] {
    let xyz = Vec3::from_array(*v);
    let (un, vn) = uv_prime(White::D65.xyz());
    let (up, vp) = uv_prime(xyz);

    let yr = xyz.y;
    let l = if yr > EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        KAPPA * yr
    };

    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    [l, 13.0 * l * (up - un), 13.0 * l * (vp - vn)]
}

/// LChuv to Luv.
pub(crate) fn lchuv_to_luv(v: &[f64; 3]) -> [f64; 3] {
    let (u, vv) = polar_to_rect(v[1], v[2]);
    [v[0], u, vv]
}

/// Luv to LChuv.
pub(crate) fn luv_to_lchuv(v: &[f64; 3]) -> [f64; 3] {
    let (c, h) = rect_to_polar(v[1], v[2]);
    [v[0], c, h]
}

/// CIE Luv (D65).
pub(crate) static LUV: SpaceDescriptor = SpaceDescriptor {
    space: Space::Luv,
    name: "luv",
    serialize: "--luv",
    channels: [
        ChannelDef::new("lightness", ChannelBound::unbounded_percent(0.0, 100.0)),
        ChannelDef::new("u", ChannelBound::unbounded(-215.0, 215.0)),
        ChannelDef::new("v", ChannelBound::unbounded(-215.0, 215.0)),
    ],
    white: White::D65,
    base: Some(Space::XyzD65),
    to_base: luv_to_xyz_d65,
    from_base: xyz_d65_to_luv,
    normalize: no_normalize,
};

/// CIE LChuv (D65).
pub(crate) static LCHUV: SpaceDescriptor = SpaceDescriptor {
    space: Space::Lchuv,
    name: "lchuv",
    serialize: "--lchuv",
    channels: [
        ChannelDef::new("lightness", ChannelBound::unbounded_percent(0.0, 100.0)),
        ChannelDef::new("chroma", ChannelBound::unbounded(0.0, 220.0)),
        ChannelDef::new("hue", ChannelBound::angle()),
    ],
    white: White::D65,
    base: Some(Space::Luv),
    to_base: lchuv_to_luv,
    from_base: luv_to_lchuv,
    normalize: normalize_lch,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_white_is_l100() {
        let luv = xyz_d65_to_luv(&White::D65.xyz().to_array());
        assert_relative_eq!(luv[0], 100.0, epsilon = 1e-10);
        assert_relative_eq!(luv[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(luv[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_black_is_origin() {
        assert_eq!(xyz_d65_to_luv(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(luv_to_xyz_d65(&[0.0, 30.0, -20.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_roundtrip_through_xyz() {
        let cases = [[53.0, 175.0, 37.7], [32.3, -9.4, -130.3], [87.7, -83.0, 107.0]];
        for luv in cases {
            let back = xyz_d65_to_luv(&luv_to_xyz_d65(&luv));
            for i in 0..3 {
                assert_relative_eq!(back[i], luv[i], epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}
