//! Error types for prism operations.
//!
//! Every variant here is a *configuration* error: an unregistered name, an
//! unknown method, a white point that cannot be adapted. They indicate
//! programmer or descriptor mistakes, are surfaced to the immediate caller,
//! and are never retried. Domain edge cases - negative chroma, undefined
//! hue, out-of-range lightness - are not errors; conversions resolve them
//! through documented silent policies and stay total.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the prism color toolkit.
#[derive(Debug, Error)]
pub enum Error {
    /// No color space is registered under the given name.
    #[error("no color space registered under the name `{0}`")]
    UnknownSpace(String),

    /// The chromatic adaptation method name is not recognized.
    #[error("unknown chromatic adaptation method `{0}`")]
    UnknownAdaptation(String),

    /// The gamut fitting method name is not recognized.
    #[error("unknown gamut fitting method `{0}`")]
    UnknownFitMethod(String),

    /// A white point produced a zero cone response and cannot be adapted.
    #[error("degenerate white point [{x}, {y}, {z}]: cone response has a zero component")]
    DegenerateWhitePoint {
        /// X tristimulus component of the offending white.
        x: f64,
        /// Y tristimulus component of the offending white.
        y: f64,
        /// Z tristimulus component of the offending white.
        z: f64,
    },

    /// A matrix required by a transform is singular.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
