//! RGB primaries and RGB/XYZ matrix generation.
//!
//! Each RGB space declares the CIE xy chromaticities of its primaries and
//! its white point; the matrices tying linear RGB to XYZ are derived from
//! those on first use and cached. Deriving the inverse from the forward
//! matrix (rather than re-deriving it from the primaries) keeps round trips
//! consistent to the last bit of the derivation.

use prism_math::{Mat3, Vec3, White, xy_to_xyz};
use std::sync::OnceLock;

/// RGB color space primaries definition.
///
/// # Example
///
/// ```rust
/// use prism_spaces::Primaries;
/// use prism_math::White;
///
/// let srgb = Primaries {
///     r: (0.640, 0.330),
///     g: (0.300, 0.600),
///     b: (0.150, 0.060),
///     white: White::D65,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity.
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity.
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity.
    pub b: (f64, f64),
    /// Reference white.
    pub white: White,
}

/// Computes the linear-RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ with Y = 1.
/// 2. Solve the scaling factors that map RGB (1, 1, 1) onto the white
///    point: `S = M^-1 * W`.
/// 3. Scale the primary columns by those factors.
///
/// # Example
///
/// ```rust
/// use prism_spaces::{Primaries, rgb_to_xyz_matrix};
/// use prism_math::{Vec3, White};
///
/// let srgb = Primaries {
///     r: (0.640, 0.330),
///     g: (0.300, 0.600),
///     b: (0.150, 0.060),
///     white: White::D65,
/// };
/// let white = rgb_to_xyz_matrix(&srgb) * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white.xyz();

    // Primaries as columns; solve M * S = W for the column scales.
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse().unwrap_or(Mat3::IDENTITY) * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to linear-RGB matrix for a set of primaries.
///
/// The inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Forward/inverse matrix pair for one RGB space, derived once.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RgbMatrices {
    pub(crate) to_xyz: Mat3,
    pub(crate) from_xyz: Mat3,
}

impl RgbMatrices {
    fn derive(primaries: &Primaries) -> Self {
        let to_xyz = rgb_to_xyz_matrix(primaries);
        Self {
            to_xyz,
            from_xyz: to_xyz.inverse().unwrap_or(Mat3::IDENTITY),
        }
    }
}

/// Lazily derives and caches the matrix pair for a space's primaries.
pub(crate) fn matrices<'a>(
    lock: &'a OnceLock<RgbMatrices>,
    primaries: &Primaries,
) -> &'a RgbMatrices {
    lock.get_or_init(|| RgbMatrices::derive(primaries))
}

/// Applies the linear-RGB to XYZ matrix of `primaries`.
pub(crate) fn linear_to_xyz(
    lock: &OnceLock<RgbMatrices>,
    primaries: &Primaries,
    v: &[f64; 3],
) -> [f64; 3] {
    (matrices(lock, primaries).to_xyz * Vec3::from_array(*v)).to_array()
}

/// Applies the XYZ to linear-RGB matrix of `primaries`.
pub(crate) fn xyz_to_linear(
    lock: &OnceLock<RgbMatrices>,
    primaries: &Primaries,
    v: &[f64; 3],
) -> [f64; 3] {
    (matrices(lock, primaries).from_xyz * Vec3::from_array(*v)).to_array()
}
