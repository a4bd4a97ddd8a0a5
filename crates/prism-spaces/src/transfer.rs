//! Transfer functions for the gamma-encoded RGB spaces.
//!
//! Each module pairs a decode (`eotf`, encoded to linear light) with an
//! encode (`oetf`, linear light to encoded). All curves are extended to
//! negative inputs by mirroring around zero, so out-of-gamut values
//! produced mid-conversion survive a round trip instead of collapsing.

/// sRGB piecewise curve (IEC 61966-2-1), also used by Display P3.
pub mod srgb {
    /// Decodes an sRGB-encoded value to linear light.
    #[inline]
    pub fn eotf(v: f64) -> f64 {
        let a = v.abs();
        if a <= 0.04045 {
            v / 12.92
        } else {
            ((a + 0.055) / 1.055).powf(2.4).copysign(v)
        }
    }

    /// Encodes linear light to sRGB.
    #[inline]
    pub fn oetf(l: f64) -> f64 {
        let a = l.abs();
        if a <= 0.0031308 {
            l * 12.92
        } else {
            (1.055 * a.powf(1.0 / 2.4) - 0.055).copysign(l)
        }
    }
}

/// Rec. 2020 camera curve (ITU-R BT.2020-2), at 64-bit constants.
pub mod rec2020 {
    const ALPHA: f64 = 1.09929682680944;
    const BETA: f64 = 0.018053968510807;

    /// Decodes a Rec. 2020-encoded value to linear light.
    #[inline]
    pub fn eotf(v: f64) -> f64 {
        let a = v.abs();
        if a < BETA * 4.5 {
            v / 4.5
        } else {
            ((a + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45).copysign(v)
        }
    }

    /// Encodes linear light to Rec. 2020.
    #[inline]
    pub fn oetf(l: f64) -> f64 {
        let a = l.abs();
        if a < BETA {
            l * 4.5
        } else {
            (ALPHA * a.powf(0.45) - (ALPHA - 1.0)).copysign(l)
        }
    }
}

/// ProPhoto RGB curve (ROMM, gamma 1.8 with a linear toe).
pub mod prophoto {
    const ET: f64 = 1.0 / 512.0;
    const ET2: f64 = 16.0 / 512.0;

    /// Decodes a ProPhoto-encoded value to linear light.
    #[inline]
    pub fn eotf(v: f64) -> f64 {
        let a = v.abs();
        if a <= ET2 { v / 16.0 } else { a.powf(1.8).copysign(v) }
    }

    /// Encodes linear light to ProPhoto.
    #[inline]
    pub fn oetf(l: f64) -> f64 {
        let a = l.abs();
        if a >= ET {
            a.powf(1.0 / 1.8).copysign(l)
        } else {
            l * 16.0
        }
    }
}

/// Applies a transfer function to each channel of a triplet.
#[inline]
pub(crate) fn map3(f: fn(f64) -> f64, v: &[f64; 3]) -> [f64; 3] {
    [f(v[0]), f(v[1]), f(v[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_roundtrip() {
        for i in 0..=100 {
            let v = f64::from(i) / 100.0;
            let back = srgb::oetf(srgb::eotf(v));
            assert!((v - back).abs() < 1e-12, "v={v}, back={back}");
        }
    }

    #[test]
    fn test_srgb_boundaries() {
        assert_eq!(srgb::eotf(0.0), 0.0);
        assert!((srgb::eotf(1.0) - 1.0).abs() < 1e-12);
        // sRGB 0.5 is approximately 0.2140 linear.
        assert!((srgb::eotf(0.5) - 0.21404114048223255).abs() < 1e-12);
    }

    #[test]
    fn test_negative_mirroring() {
        assert!((srgb::eotf(-0.5) + srgb::eotf(0.5)).abs() < 1e-15);
        assert!((rec2020::oetf(-0.5) + rec2020::oetf(0.5)).abs() < 1e-15);
        assert!((prophoto::eotf(-0.5) + prophoto::eotf(0.5)).abs() < 1e-15);
    }

    #[test]
    fn test_rec2020_roundtrip() {
        for i in 0..=100 {
            let v = f64::from(i) / 100.0;
            let back = rec2020::oetf(rec2020::eotf(v));
            assert!((v - back).abs() < 1e-12, "v={v}, back={back}");
        }
    }

    #[test]
    fn test_prophoto_roundtrip() {
        for i in 0..=100 {
            let v = f64::from(i) / 100.0;
            let back = prophoto::oetf(prophoto::eotf(v));
            assert!((v - back).abs() < 1e-12, "v={v}, back={back}");
        }
    }
}
