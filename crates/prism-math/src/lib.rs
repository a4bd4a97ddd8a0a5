//! # prism-math
//!
//! Math utilities for the prism color toolkit.
//!
//! This crate provides the numeric primitives behind color conversion:
//!
//! - [`Mat3`] - 3x3 f64 matrices for linear color transforms
//! - [`Vec3`] - f64 tristimulus/RGB triplets
//! - [`White`] - standard reference white points (D50, D65)
//! - [`Method`] / [`AdaptationCache`] - chromatic adaptation transforms
//!
//! # Design
//!
//! Color channels are 64-bit throughout the toolkit, so the matrix and
//! vector types here are f64 with [`glam`] (`DMat3`/`DVec3`) interop for
//! callers already living in that ecosystem. All matrix operations assume
//! **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{AdaptationCache, Method, White};
//!
//! let cache = AdaptationCache::new();
//! let d50_to_d65 = cache.get(Method::Bradford, White::D50, White::D65).unwrap();
//! let adapted = d50_to_d65 * White::D50.xyz();
//! assert!((adapted.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with the SIMD math ecosystem
//! - [`prism-core`] - Error types
//!
//! # Used By
//!
//! - `prism-spaces` - RGB/XYZ matrix generation
//! - `prism-color` - Conversion engine and gamut fitter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;
mod white;

pub use adapt::{AdaptationCache, Method, adaptation_matrix};
pub use mat3::Mat3;
pub use vec3::Vec3;
pub use white::{White, xy_to_xyz};
