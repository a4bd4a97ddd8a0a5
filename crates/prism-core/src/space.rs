//! Color space identifiers.
//!
//! [`Space`] is the closed set of spaces the toolkit ships with. The enum
//! carries only identity; channel layout, bounds, white point, and the
//! conversion functions live in the `prism-spaces` descriptor records that
//! are resolved from these tags at conversion time.

/// Identifier for a supported color space.
///
/// # Example
///
/// ```rust
/// use prism_core::Space;
///
/// assert_eq!(Space::Oklch.name(), "oklch");
/// assert!(Space::Oklch.is_polar());
/// assert!(!Space::Srgb.is_polar());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// sRGB with the standard transfer function.
    Srgb,
    /// Linear-light sRGB.
    SrgbLinear,
    /// HSL cylindrical view of sRGB.
    Hsl,
    /// HSV cylindrical view of sRGB.
    Hsv,
    /// HWB cylindrical view of sRGB.
    Hwb,
    /// Display P3 with the sRGB transfer function.
    DisplayP3,
    /// Linear-light Display P3.
    DisplayP3Linear,
    /// Rec. 2020 with the BT.1886-style transfer function.
    Rec2020,
    /// Linear-light Rec. 2020.
    Rec2020Linear,
    /// ProPhoto RGB with its 1.8-gamma transfer function (D50).
    ProPhotoRgb,
    /// Linear-light ProPhoto RGB (D50).
    ProPhotoRgbLinear,
    /// CIE Lab, D50 reference white.
    Lab,
    /// CIE LCh, the polar form of Lab (D50).
    Lch,
    /// Oklab, D65 reference white.
    Oklab,
    /// OkLCh, the polar form of Oklab (D65).
    Oklch,
    /// CIE Luv, D65 reference white.
    Luv,
    /// CIE LChuv, the polar form of Luv (D65).
    Lchuv,
    /// CIE XYZ at D65 - the conversion anchor.
    XyzD65,
    /// CIE XYZ at D50.
    XyzD50,
}

impl Space {
    /// Every supported space, in registry order.
    pub const ALL: [Self; 19] = [
        Self::Srgb,
        Self::SrgbLinear,
        Self::Hsl,
        Self::Hsv,
        Self::Hwb,
        Self::DisplayP3,
        Self::DisplayP3Linear,
        Self::Rec2020,
        Self::Rec2020Linear,
        Self::ProPhotoRgb,
        Self::ProPhotoRgbLinear,
        Self::Lab,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
        Self::Luv,
        Self::Lchuv,
        Self::XyzD65,
        Self::XyzD50,
    ];

    /// Canonical registry name of the space.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::SrgbLinear => "srgb-linear",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Hwb => "hwb",
            Self::DisplayP3 => "display-p3",
            Self::DisplayP3Linear => "display-p3-linear",
            Self::Rec2020 => "rec2020",
            Self::Rec2020Linear => "rec2020-linear",
            Self::ProPhotoRgb => "prophoto-rgb",
            Self::ProPhotoRgbLinear => "prophoto-rgb-linear",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Luv => "luv",
            Self::Lchuv => "lchuv",
            Self::XyzD65 => "xyz-d65",
            Self::XyzD50 => "xyz-d50",
        }
    }

    /// Whether the space uses a polar (hue-bearing) parameterization.
    pub const fn is_polar(self) -> bool {
        matches!(
            self,
            Self::Hsl | Self::Hsv | Self::Hwb | Self::Lch | Self::Oklch | Self::Lchuv
        )
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
