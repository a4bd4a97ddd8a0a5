//! # prism-color
//!
//! The conversion engine and gamut fitter of the prism color toolkit.
//!
//! This crate ties the space descriptors from `prism-spaces` and the
//! adaptation machinery from `prism-math` into the public color surface:
//!
//! - [`Converter`] - any-to-any conversion through the XYZ D65 anchor
//! - [`Converter::fit`] / [`Converter::in_gamut`] - gamut mapping
//! - [`Color`] - a space tag, three channels, and alpha
//! - [`ParsedColor`] / [`to_css`] - the parse/serialize boundary
//!
//! # Architecture
//!
//! ```text
//!                   prism-color
//!                        |
//!            +-----------+-----------+
//!            |                       |
//!      prism-spaces             prism-math
//!            |                       |
//!            +-----------+-----------+
//!                        |
//!                   prism-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use prism_color::Color;
//! use prism_core::Space;
//!
//! // A Display P3 green is out of the sRGB gamut.
//! let green = Color::new(Space::DisplayP3, [0.0, 1.0, 0.0], 1.0);
//! let srgb = green.to(Space::Srgb).unwrap();
//! assert!(!srgb.in_gamut());
//!
//! // Fit it back in, preserving lightness and hue perceptually.
//! let fitted = srgb.fit("oklch-chroma").unwrap();
//! assert!(fitted.in_gamut());
//! ```
//!
//! # Degenerate cases
//!
//! Conversions are total: undefined channels resolve to zero on input and
//! are re-derived on output, negative chroma silently clamps, and nothing
//! is range-checked until fitting. Only configuration mistakes - unknown
//! space, adaptation, or fit-method names - produce errors.
//!
//! # Dependencies
//!
//! - [`prism-core`] - Channel model, space ids, errors
//! - [`prism-math`] - Matrices, white points, CAT cache
//! - [`prism-spaces`] - Space descriptors and registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod convert;
mod gamut;
mod serialize;

pub use color::Color;
pub use convert::{Converter, DEFAULT_ADAPTATION};
pub use gamut::{DEFAULT_FIT, GAMUT_TOLERANCE};
pub use serialize::{FormatOptions, ParsedColor, to_css};

// Re-export sub-crates for convenience
pub use prism_math as math;
pub use prism_spaces as spaces;

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::{Color, Converter, FormatOptions, ParsedColor, to_css};
    pub use prism_core::{Channel, Coords, Error, Result, Space};
    pub use prism_math::{Method, White};
    pub use prism_spaces::{descriptor, descriptor_for};
}
