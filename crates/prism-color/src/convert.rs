//! The conversion engine.
//!
//! Space descriptors form a tree rooted at the XYZ D65 anchor: every space
//! declares one base, and its `to_base`/`from_base` transforms tie it to
//! that base only. [`Converter::convert`] composes a conversion between any
//! two spaces by walking the source's base chain up to the lowest common
//! ancestor of both spaces (the anchor in the worst case) and then walking
//! down to the target. Whenever a hop crosses spaces with different
//! declared reference whites, the matching chromatic adaptation matrix is
//! pulled from the engine's cache and applied.
//!
//! Undefined channels are resolved to 0.0 before the first transform and
//! re-derived by the *target's* normalize hook afterwards - hue can gain
//! or lose meaning as chroma changes across spaces, so input markers are
//! never forwarded.

use prism_core::{Coords, Result, Space, resolve3, wrap3};
use prism_math::{AdaptationCache, Method, Vec3, White};
use prism_spaces::{SpaceDescriptor, cylindrical, descriptor};
use std::sync::OnceLock;

/// The adaptation method used when none is chosen explicitly.
pub const DEFAULT_ADAPTATION: Method = Method::Bradford;

/// The conversion engine.
///
/// Owns the chromatic adaptation cache; everything else is stateless. A
/// `Converter` is cheap to construct and safe to share across threads, and
/// most callers use the process-wide [`Converter::global`] instance. Tests
/// that want isolated cache state construct their own.
///
/// # Example
///
/// ```rust
/// use prism_color::Converter;
/// use prism_core::{Space, wrap3};
///
/// let engine = Converter::new();
/// let lch = engine
///     .convert(&wrap3([50.0, 0.0, 0.0]), Space::Lab, Space::Lch)
///     .unwrap();
/// assert_eq!(lch[1].resolve(-1.0), 0.0);
/// assert!(lch[2].is_undefined()); // a gray has no hue
/// ```
#[derive(Debug)]
pub struct Converter {
    cats: AdaptationCache,
    adaptation: Method,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Creates an engine using Bradford adaptation.
    pub fn new() -> Self {
        Self::with_adaptation(DEFAULT_ADAPTATION)
    }

    /// Creates an engine using the given adaptation method.
    pub fn with_adaptation(adaptation: Method) -> Self {
        Self {
            cats: AdaptationCache::new(),
            adaptation,
        }
    }

    /// The process-wide engine with default settings.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Converter> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// The adaptation method this engine applies at white-point crossings.
    pub fn adaptation(&self) -> Method {
        self.adaptation
    }

    /// Converts coordinates from one space to another.
    ///
    /// Identity conversions return the input exactly, undefined markers
    /// included. All other paths are total: undefined inputs are resolved
    /// to 0.0 for the algebra and the target re-derives its own undefined
    /// channels.
    pub fn convert(&self, coords: &Coords, from: Space, to: Space) -> Result<Coords> {
        if from == to {
            return Ok(*coords);
        }

        let mut v = resolve3(coords);

        let up = base_chain(from);
        let down = base_chain(to);
        let (ascent, descent) = meeting_point(&up, &down);

        for k in 0..ascent {
            let space = up[k];
            let base = up[k + 1];
            v = (space.to_base)(&v);
            v = self.adapt(v, space.white, base.white)?;
        }

        for k in (0..descent).rev() {
            let base = down[k + 1];
            let space = down[k];
            v = self.adapt(v, base.white, space.white)?;
            v = (space.from_base)(&v);
        }

        let mut out = wrap3(v);
        (descriptor(to).normalize)(&mut out);
        Ok(out)
    }

    /// Whether the color is achromatic - a gray with no meaningful hue.
    ///
    /// Judged on the Lab opponent axes after rounding at display
    /// precision, so conversion noise does not fabricate chromaticity.
    pub fn is_achromatic(&self, coords: &Coords, space: Space) -> Result<bool> {
        let lab = self.convert(coords, space, Space::Lab)?;
        Ok(cylindrical::is_achromatic(&[
            lab[1].resolve(0.0),
            lab[2].resolve(0.0),
        ]))
    }

    fn adapt(&self, v: [f64; 3], from: White, to: White) -> Result<[f64; 3]> {
        if from == to {
            return Ok(v);
        }
        let m = self.cats.get(self.adaptation, from, to)?;
        Ok((m * Vec3::from_array(v)).to_array())
    }
}

/// The descriptor chain from a space up to the anchor, inclusive.
fn base_chain(space: Space) -> Vec<&'static SpaceDescriptor> {
    let mut chain = vec![descriptor(space)];
    while let Some(base) = chain[chain.len() - 1].base {
        chain.push(descriptor(base));
    }
    chain
}

/// Finds the lowest common ancestor of the two chains.
///
/// Returns the number of ascent hops on `up` and the index of the ancestor
/// on `down` (the number of descent hops). Both chains end at the anchor,
/// so a meeting point always exists.
fn meeting_point(
    up: &[&'static SpaceDescriptor],
    down: &[&'static SpaceDescriptor],
) -> (usize, usize) {
    for (k, space) in up.iter().enumerate() {
        if let Some(j) = down.iter().position(|d| d.space == space.space) {
            return (k, j);
        }
    }
    // Unreachable for well-formed descriptors; treat as meeting at the
    // anchor ends of both chains.
    (up.len() - 1, down.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prism_core::Channel;

    #[test]
    fn test_identity_preserves_markers() {
        let engine = Converter::new();
        let coords = [Channel::Value(0.6), Channel::Value(0.0), Channel::Undefined];
        let out = engine.convert(&coords, Space::Lch, Space::Lch).unwrap();
        assert_eq!(out, coords);
    }

    #[test]
    fn test_single_hop_skips_anchor() {
        let engine = Converter::new();
        // hsv -> hsl is one hop; going through the anchor would introduce
        // rounding noise this assertion would catch.
        let out = engine
            .convert(&wrap3([0.0, 1.0, 1.0]), Space::Hsv, Space::Hsl)
            .unwrap();
        assert_eq!(out[1].resolve(0.0), 1.0);
        assert_eq!(out[2].resolve(0.0), 0.5);
    }

    #[test]
    fn test_d50_anchor_adaptation() {
        let engine = Converter::new();
        // The D50 white expressed in xyz-d50 must land on the D65 white in
        // the anchor.
        let w50 = White::D50.xyz().to_array();
        let out = engine
            .convert(&wrap3(w50), Space::XyzD50, Space::XyzD65)
            .unwrap();
        let w65 = White::D65.xyz();
        assert_relative_eq!(out[0].resolve(0.0), w65.x, epsilon = 1e-9);
        assert_relative_eq!(out[1].resolve(0.0), w65.y, epsilon = 1e-9);
        assert_relative_eq!(out[2].resolve(0.0), w65.z, epsilon = 1e-9);
    }

    #[test]
    fn test_achromatic_predicate() {
        let engine = Converter::new();
        let gray = wrap3([0.5, 0.5, 0.5]);
        assert!(engine.is_achromatic(&gray, Space::Srgb).unwrap());
        let red = wrap3([1.0, 0.0, 0.0]);
        assert!(!engine.is_achromatic(&red, Space::Srgb).unwrap());
    }

    #[test]
    fn test_meeting_point_short_circuit() {
        let up = base_chain(Space::Hwb);
        let down = base_chain(Space::Srgb);
        let (ascent, descent) = meeting_point(&up, &down);
        // hwb -> hsv -> hsl -> srgb, met without touching the anchor.
        assert_eq!(ascent, 3);
        assert_eq!(descent, 0);
    }
}
