//! # prism-spaces
//!
//! Color space descriptors and the space registry for the prism toolkit.
//!
//! Every supported [`Space`](prism_core::Space) has one static
//! [`SpaceDescriptor`] here declaring its channels and bounds, reference
//! white, base space, and the pure `to_base`/`from_base` coordinate
//! transforms. The conversion engine in `prism-color` walks these records;
//! this crate contains all of the per-space math and none of the graph
//! logic.
//!
//! # Base chains
//!
//! Descriptors form a tree rooted at the XYZ D65 anchor:
//!
//! ```text
//! hwb -> hsv -> hsl -> srgb -> srgb-linear ----+
//! display-p3 -> display-p3-linear ------------+
//! rec2020 -> rec2020-linear ------------------+
//! lch -> lab -> xyz-d50 ----------------------+--> xyz-d65
//! prophoto-rgb -> prophoto-rgb-linear -> xyz-d50
//! oklch -> oklab -----------------------------+
//! lchuv -> luv --------------------------------+
//! ```
//!
//! # Usage
//!
//! ```rust
//! use prism_spaces::{descriptor, descriptor_for};
//! use prism_core::Space;
//!
//! let lch = descriptor(Space::Lch);
//! assert_eq!(lch.base, Some(Space::Lab));
//!
//! assert!(descriptor_for("oklch").is_ok());
//! assert!(descriptor_for("not-a-space").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`prism-core`] - Channel model, space ids, bounds, errors
//! - [`prism-math`] - Matrices, white points
//!
//! # Used By
//!
//! - `prism-color` - Conversion engine and gamut fitter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cylindrical;
mod descriptor;
mod rgb;
pub mod transfer;

mod display_p3;
mod hsl;
mod hsv;
mod hwb;
mod lab;
mod luv;
mod oklab;
mod prophoto;
mod rec2020;
mod srgb;
mod xyz;

pub use cylindrical::ACHROMATIC_THRESHOLD;
pub use descriptor::{ChannelDef, SpaceDescriptor, descriptor, descriptor_for};
pub use rgb::{Primaries, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
