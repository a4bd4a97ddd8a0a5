//! The `Color` value type.
//!
//! A color is a space tag, three channels, and an alpha channel. The type
//! is a thin veneer over the engine: construction normalizes undefined
//! channels through the space's own rules, and the methods delegate to the
//! process-wide [`Converter`]. Per-channel accessors and string formatting
//! niceties live with the API layer, not here.

use crate::convert::Converter;
use prism_core::{Channel, Coords, Result, Space, wrap3};
use prism_spaces::descriptor;

/// A color in one of the supported color spaces.
///
/// # Example
///
/// ```rust
/// use prism_color::Color;
/// use prism_core::Space;
///
/// let gray = Color::new(Space::Hsv, [120.0, 0.0, 0.5], 1.0);
/// // Zero saturation: the hue is marked undefined on construction.
/// assert!(gray.coords()[0].is_undefined());
///
/// let lch = gray.to(Space::Lch).unwrap();
/// assert!(lch.coords()[2].is_undefined());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    space: Space,
    coords: Coords,
    alpha: Channel,
}

impl Color {
    /// Creates a color from plain channel values.
    ///
    /// The space's normalize rules run immediately, so channels that are
    /// meaningless for these values (the hue of a zero-chroma color) come
    /// out undefined.
    pub fn new(space: Space, coords: [f64; 3], alpha: f64) -> Self {
        Self::with_channels(space, wrap3(coords), Channel::Value(alpha))
    }

    /// Creates a color from channels that may already carry undefined
    /// markers.
    pub fn with_channels(space: Space, mut coords: Coords, alpha: Channel) -> Self {
        (descriptor(space).normalize)(&mut coords);
        Self {
            space,
            coords,
            alpha,
        }
    }

    /// The color's space.
    pub fn space(&self) -> Space {
        self.space
    }

    /// The color's coordinates.
    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    /// The alpha channel.
    pub fn alpha(&self) -> Channel {
        self.alpha
    }

    /// Converts this color to another space.
    ///
    /// Alpha is carried over unchanged; it never participates in the
    /// coordinate transform.
    pub fn to(&self, space: Space) -> Result<Self> {
        let coords = Converter::global().convert(&self.coords, self.space, space)?;
        Ok(Self {
            space,
            coords,
            alpha: self.alpha,
        })
    }

    /// Whether this color is within its space's gamut.
    pub fn in_gamut(&self) -> bool {
        Converter::global().in_gamut(&self.coords, self.space)
    }

    /// Returns this color fitted into its space's gamut with the named
    /// method. A no-op for colors already in gamut.
    pub fn fit(&self, method: &str) -> Result<Self> {
        let coords = Converter::global().fit(&self.coords, self.space, method)?;
        Ok(Self {
            space: self.space,
            coords,
            alpha: self.alpha,
        })
    }

    /// Whether this color is achromatic (a gray with no meaningful hue).
    pub fn is_achromatic(&self) -> Result<bool> {
        Converter::global().is_achromatic(&self.coords, self.space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_normalizes() {
        let c = Color::new(Space::Lch, [50.0, 0.0, 120.0], 1.0);
        assert!(c.coords()[2].is_undefined());

        let c = Color::new(Space::Lch, [50.0, 30.0, 120.0], 1.0);
        assert!(!c.coords()[2].is_undefined());
    }

    #[test]
    fn test_alpha_carried_through_conversion() {
        let c = Color::new(Space::Srgb, [1.0, 0.0, 0.0], 0.5);
        let lab = c.to(Space::Lab).unwrap();
        assert_eq!(lab.alpha(), Channel::Value(0.5));
    }

    #[test]
    fn test_rectangular_spaces_keep_all_channels() {
        let c = Color::new(Space::Srgb, [0.5, 0.5, 0.5], 1.0);
        assert!(c.coords().iter().all(|ch| !ch.is_undefined()));
    }
}
