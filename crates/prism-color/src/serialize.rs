//! The parse/serialize boundary.
//!
//! The core never parses text. A parsing collaborator hands over a
//! [`ParsedColor`] - a space tag plus range-normalized channels - and the
//! serializer here consumes the engine surface (`fit`, `in_gamut`, the
//! undefined markers) to produce the `color(<token> ...)` notation.
//! Undefined channels print as `none`; values are rounded at the
//! configured display precision.

use crate::color::Color;
use crate::gamut::DEFAULT_FIT;
use prism_core::{Channel, Coords, DEFAULT_PRECISION, Result, Space, util};
use prism_spaces::descriptor;

/// A raw parsed color as produced by the parsing collaborator.
///
/// Channels arrive already range-normalized for the space's channel kinds
/// (percentages scaled, angles in degrees); `none` components arrive as
/// [`Channel::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColor {
    /// Target space the text named.
    pub space: Space,
    /// The three coordinate channels.
    pub coords: Coords,
    /// The alpha channel.
    pub alpha: Channel,
}

impl From<ParsedColor> for Color {
    fn from(parsed: ParsedColor) -> Self {
        Self::with_channels(parsed.space, parsed.coords, parsed.alpha)
    }
}

/// Options for [`to_css`].
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Significant digits per channel.
    pub precision: u32,
    /// Fit method applied to out-of-gamut colors before serializing;
    /// `None` serializes out-of-range values as-is.
    pub fit: Option<&'static str>,
    /// `Some(true)` always prints alpha, `Some(false)` never does, `None`
    /// prints it only when not fully opaque.
    pub alpha: Option<bool>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            fit: Some(DEFAULT_FIT),
            alpha: None,
        }
    }
}

/// Serializes a color in the `color(<token> c1 c2 c3 [/ alpha])` notation.
///
/// # Example
///
/// ```rust
/// use prism_color::{Color, FormatOptions, to_css};
/// use prism_core::Space;
///
/// let c = Color::new(Space::Hsv, [20.0, 1.0, 0.75], 1.0);
/// let s = to_css(&c, &FormatOptions::default()).unwrap();
/// assert_eq!(s, "color(--hsv 20 1 0.75)");
/// ```
pub fn to_css(color: &Color, options: &FormatOptions) -> Result<String> {
    let color = match options.fit {
        Some(method) if !color.in_gamut() => color.fit(method)?,
        _ => *color,
    };

    let d = descriptor(color.space());
    let mut out = String::from("color(");
    out.push_str(d.serialize);

    for channel in color.coords() {
        out.push(' ');
        match channel.value() {
            None => out.push_str("none"),
            Some(v) => out.push_str(&util::fmt_float(v, options.precision)),
        }
    }

    let alpha = color.alpha().resolve(1.0);
    let show_alpha = options.alpha.unwrap_or(alpha < 1.0);
    if show_alpha {
        out.push_str(" / ");
        out.push_str(&util::fmt_float(alpha, options.precision));
    }

    out.push(')');
    Ok(out)
}
