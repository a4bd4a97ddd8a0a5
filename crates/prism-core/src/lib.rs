//! # prism-core
//!
//! Core types for the prism color toolkit.
//!
//! This crate defines the vocabulary shared by every other prism crate:
//!
//! - [`Channel`] - a single coordinate that is either a value or *undefined*
//! - [`Coords`] - the three-channel coordinate tuple of a color
//! - [`Space`] - identifiers for the supported color spaces
//! - [`ChannelBound`] - per-channel gamut bounds used for range checks
//! - [`Error`] - the unified error type for configuration failures
//!
//! # The undefined marker
//!
//! Some channels are meaningless for particular colors: a gray has no hue.
//! Rather than smuggling that fact through NaN bit patterns, prism makes it
//! explicit in the type system:
//!
//! ```rust
//! use prism_core::Channel;
//!
//! let hue = Channel::Undefined;
//! assert!(hue.is_undefined());
//! // Algorithms that need a real number decide the substitute themselves.
//! assert_eq!(hue.resolve(0.0), 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error derive
//!
//! # Used By
//!
//! - `prism-math` - matrices, white points, chromatic adaptation
//! - `prism-spaces` - space descriptors and the registry
//! - `prism-color` - the conversion engine and gamut fitter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod channel;
mod error;
mod space;
pub mod util;

pub use channel::{Channel, ChannelBound, ChannelKind, Coords, resolve3, wrap3};
pub use error::{Error, Result};
pub use space::Space;

/// Default display precision in decimal digits.
///
/// Used when rounding values for textual output and, critically, when
/// rounding chroma-like magnitudes before the achromatic threshold test.
pub const DEFAULT_PRECISION: u32 = 5;
