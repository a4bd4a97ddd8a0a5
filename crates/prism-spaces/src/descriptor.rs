//! Space descriptor records and the name registry.
//!
//! A [`SpaceDescriptor`] is the immutable, data-only declaration of one
//! color space: identity, channel layout and bounds, reference white, base
//! space, and the two pure coordinate transforms tying it to that base. The
//! conversion engine resolves any-to-any conversions purely from these
//! records; no space knows about any other except its declared base.

use crate::{display_p3, hsl, hsv, hwb, lab, luv, oklab, prophoto, rec2020, srgb, xyz};
use prism_core::{ChannelBound, Coords, Error, Result, Space};
use prism_math::White;

/// One named channel of a color space.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDef {
    /// Channel name ("l", "chroma", "hue", ...).
    pub name: &'static str,
    /// Gamut bound of the channel.
    pub bound: ChannelBound,
}

impl ChannelDef {
    pub(crate) const fn new(name: &'static str, bound: ChannelBound) -> Self {
        Self { name, bound }
    }
}

/// Static descriptor of a color space.
///
/// # Invariants
///
/// - Following `base` from any descriptor terminates at the XYZ D65 anchor
///   (the only descriptor with `base == None`) without cycles.
/// - `from_base(to_base(x)) == x` within 1e-10 per channel for in-bounds
///   `x`.
/// - `to_base`/`from_base` are total: undefined inputs arrive resolved to
///   0.0 and out-of-domain values follow documented silent policies
///   (negative chroma clamps to zero); neither function panics or errors.
#[derive(Debug, Clone, Copy)]
pub struct SpaceDescriptor {
    /// Identifier of the described space.
    pub space: Space,
    /// Canonical registry name.
    pub name: &'static str,
    /// Token used in `color()` textual serialization.
    pub serialize: &'static str,
    /// Ordered channel definitions.
    pub channels: [ChannelDef; 3],
    /// Reference white of the space's natural frame.
    pub white: White,
    /// The space this space's transforms are defined against; `None` only
    /// for the anchor.
    pub base: Option<Space>,
    /// Transforms coordinates into the base space.
    pub to_base: fn(&[f64; 3]) -> [f64; 3],
    /// Transforms base-space coordinates into this space.
    pub from_base: fn(&[f64; 3]) -> [f64; 3],
    /// Re-derives undefined channels after a conversion lands here (the
    /// achromatic-hue rule for polar spaces; identity elsewhere).
    pub normalize: fn(&mut Coords),
}

impl SpaceDescriptor {
    /// Whether any channel participates in gamut checks.
    pub fn has_bounds(&self) -> bool {
        self.channels.iter().any(|c| c.bound.bounded)
    }
}

/// Identity coordinate transform for spaces whose base shares their frame.
pub(crate) fn identity3(v: &[f64; 3]) -> [f64; 3] {
    *v
}

/// Normalize hook for spaces with no undefined-channel rules.
pub(crate) fn no_normalize(_: &mut Coords) {}

/// The descriptor of a space.
pub fn descriptor(space: Space) -> &'static SpaceDescriptor {
    match space {
        Space::Srgb => &srgb::SRGB,
        Space::SrgbLinear => &srgb::SRGB_LINEAR,
        Space::Hsl => &hsl::HSL,
        Space::Hsv => &hsv::HSV,
        Space::Hwb => &hwb::HWB,
        Space::DisplayP3 => &display_p3::DISPLAY_P3,
        Space::DisplayP3Linear => &display_p3::DISPLAY_P3_LINEAR,
        Space::Rec2020 => &rec2020::REC2020,
        Space::Rec2020Linear => &rec2020::REC2020_LINEAR,
        Space::ProPhotoRgb => &prophoto::PROPHOTO,
        Space::ProPhotoRgbLinear => &prophoto::PROPHOTO_LINEAR,
        Space::Lab => &lab::LAB,
        Space::Lch => &lab::LCH,
        Space::Oklab => &oklab::OKLAB,
        Space::Oklch => &oklab::OKLCH,
        Space::Luv => &luv::LUV,
        Space::Lchuv => &luv::LCHUV,
        Space::XyzD65 => &xyz::XYZ_D65,
        Space::XyzD50 => &xyz::XYZ_D50,
    }
}

/// Looks up a descriptor by registry name.
///
/// Fails with [`Error::UnknownSpace`] for names nothing is registered
/// under - a configuration error for the caller to surface.
pub fn descriptor_for(name: &str) -> Result<&'static SpaceDescriptor> {
    Space::ALL
        .iter()
        .map(|s| descriptor(*s))
        .find(|d| d.name == name)
        .ok_or_else(|| Error::UnknownSpace(name.to_string()))
}
