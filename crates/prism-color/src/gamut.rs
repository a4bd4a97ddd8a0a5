//! Gamut checks and gamut fitting.
//!
//! Conversion never enforces bounds; this module is the sole gatekeeper.
//! [`Converter::in_gamut`] tests a coordinate tuple against the target
//! space's own channel bounds, and [`Converter::fit`] maps an out-of-range
//! tuple back in by one of the named strategies:
//!
//! - `clip` - per-channel clamp. Fast, but distorts hue/chroma
//!   relationships.
//! - `oklch-chroma` (default) / `lch-chroma` - hold lightness and hue
//!   fixed in the perceptually uniform cylindrical space and binary-search
//!   the largest chroma whose image lands in gamut.
//!
//! Unknown method names are configuration errors. Fitting an in-gamut
//! color is a value-level no-op, and fitting is idempotent.

use crate::convert::Converter;
use prism_core::{Channel, Coords, Error, Result, Space};
use prism_spaces::descriptor;

/// Default tolerance for gamut checks.
pub const GAMUT_TOLERANCE: f64 = 0.000075;

/// The fit method used when none is chosen explicitly.
pub const DEFAULT_FIT: &str = "oklch-chroma";

/// Hard ceiling on chroma-search iterations. The interval halves each
/// step; 64 steps exhaust f64 resolution.
const MAX_ITERATIONS: u32 = 64;

impl Converter {
    /// Whether the coordinates are in gamut for the space, within the
    /// default tolerance.
    pub fn in_gamut(&self, coords: &Coords, space: Space) -> bool {
        self.in_gamut_with_tolerance(coords, space, GAMUT_TOLERANCE)
    }

    /// Whether the coordinates are in gamut within `tolerance`.
    ///
    /// Every bounded channel must fall within `[min - tolerance,
    /// max + tolerance]`. Angle channels are always in range once
    /// normalized; unbounded channels are always in range. Undefined
    /// channels check as 0.
    pub fn in_gamut_with_tolerance(&self, coords: &Coords, space: Space, tolerance: f64) -> bool {
        let d = descriptor(space);
        coords
            .iter()
            .zip(&d.channels)
            .all(|(c, ch)| ch.bound.contains(c.resolve(0.0), tolerance))
    }

    /// Clamps each defined channel to its bound, independently of the
    /// others. Angles wrap instead of clamping; undefined channels pass
    /// through untouched.
    pub fn clip(&self, coords: &Coords, space: Space) -> Coords {
        let d = descriptor(space);
        let mut out = *coords;
        for (c, ch) in out.iter_mut().zip(&d.channels) {
            *c = c.map(|v| ch.bound.clamp(v));
        }
        out
    }

    /// Fits the coordinates into the space's gamut using the named method.
    ///
    /// Returns a new tuple; the input is never mutated. An unrecognized
    /// method name fails with [`Error::UnknownFitMethod`].
    pub fn fit(&self, coords: &Coords, space: Space, method: &str) -> Result<Coords> {
        match method {
            "clip" => Ok(self.clip(coords, space)),
            "oklch-chroma" => self.reduce_chroma(coords, space, Space::Oklch, 1.0, 1e-4),
            "lch-chroma" => self.reduce_chroma(coords, space, Space::Lch, 100.0, 1e-3),
            _ => Err(Error::UnknownFitMethod(method.to_string())),
        }
    }

    /// Chroma-reduction gamut mapping through a cylindrical space.
    ///
    /// Lightness and hue are held fixed while chroma is binary-searched
    /// downward for the largest value whose image in the target space is
    /// in gamut (zero tolerance inside the search). Out-of-range lightness
    /// short-circuits to the white or black endpoint before any search.
    /// The loop is bounded; on reaching the ceiling the best interval
    /// found so far wins. One final clip removes the epsilon left by the
    /// terminated search.
    fn reduce_chroma(
        &self,
        coords: &Coords,
        space: Space,
        cylindrical: Space,
        max_lightness: f64,
        epsilon: f64,
    ) -> Result<Coords> {
        if self.in_gamut(coords, space) {
            return Ok(*coords);
        }

        let mapped = self.convert(coords, space, cylindrical)?;
        let lightness = mapped[0].resolve(0.0);

        if lightness >= max_lightness {
            let white = [
                Channel::Value(max_lightness),
                Channel::Value(0.0),
                Channel::Undefined,
            ];
            let out = self.convert(&white, cylindrical, space)?;
            return Ok(self.clip(&out, space));
        }
        if lightness <= 0.0 {
            let black = [Channel::Value(0.0), Channel::Value(0.0), Channel::Undefined];
            let out = self.convert(&black, cylindrical, space)?;
            return Ok(self.clip(&out, space));
        }

        let hue = mapped[2];
        let mut low = 0.0;
        let mut high = mapped[1].resolve(0.0).max(0.0);
        let mut iterations = 0;

        while high - low > epsilon && iterations < MAX_ITERATIONS {
            let chroma = 0.5 * (low + high);
            let candidate = self.convert(
                &[Channel::Value(lightness), Channel::Value(chroma), hue],
                cylindrical,
                space,
            )?;
            if self.in_gamut_with_tolerance(&candidate, space, 0.0) {
                low = chroma;
            } else {
                high = chroma;
            }
            iterations += 1;
        }

        let fitted = self.convert(
            &[Channel::Value(lightness), Channel::Value(low), hue],
            cylindrical,
            space,
        )?;
        Ok(self.clip(&fitted, space))
    }
}
