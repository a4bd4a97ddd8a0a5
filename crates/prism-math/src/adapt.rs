//! Chromatic adaptation transforms (CAT).
//!
//! A CAT maps XYZ tristimulus values seen under one illuminant to the values
//! a fully adapted observer would see under another. The conversion engine
//! applies one whenever a hop in the base chain crosses spaces with
//! different reference whites (Lab's D50 frame vs the D65 anchor, for
//! example).
//!
//! # Supported Methods
//!
//! - [`Method::Bradford`] - best overall accuracy, the engine default
//! - [`Method::VonKries`] - classic cone response model
//! - [`Method::XyzScaling`] - identity cone space, simple but crude
//! - [`Method::Cat02`] - from the CIECAM02 appearance model
//! - [`Method::Cmccat97`] / [`Method::Cmccat2000`] - CMC committee CATs
//! - [`Method::Sharp`] - spectrally sharpened cone space
//!
//! # Derivation
//!
//! For cone matrix `M` and white points `src`, `dst`:
//!
//! ```text
//! D = diag(M * dst / M * src)       (element-wise division)
//! A = M^-1 * D * M
//! ```
//!
//! The reverse direction is the *matrix inverse* of `A`, not a fresh
//! derivation, so the two directions round-trip exactly up to floating
//! point. [`AdaptationCache`] memoizes both at once.
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{AdaptationCache, Method, White};
//!
//! let cache = AdaptationCache::new();
//! let m = cache.get(Method::Bradford, White::D65, White::D50).unwrap();
//! let d50 = m * White::D65.xyz();
//! assert!((d50.x - White::D50.xyz().x).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3, White};
use prism_core::{Error, Result};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Chromatic adaptation method, naming the cone response matrix used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Bradford (Lam 1985). The default.
    Bradford,
    /// Von Kries with the Hunt-Pointer-Estevez transformation.
    VonKries,
    /// Plain XYZ scaling (identity cone space).
    XyzScaling,
    /// CAT02 from CIECAM02.
    Cat02,
    /// CMCCAT97.
    Cmccat97,
    /// Spectrally sharpened cone space.
    Sharp,
    /// CMCCAT2000.
    Cmccat2000,
}

impl Method {
    /// Method name as used in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bradford => "bradford",
            Self::VonKries => "von-kries",
            Self::XyzScaling => "xyz-scaling",
            Self::Cat02 => "cat02",
            Self::Cmccat97 => "cmccat97",
            Self::Sharp => "sharp",
            Self::Cmccat2000 => "cmccat2000",
        }
    }

    /// Resolves a configured method name.
    ///
    /// Unknown names are a configuration error, never recoverable per call.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "bradford" => Ok(Self::Bradford),
            "von-kries" => Ok(Self::VonKries),
            "xyz-scaling" => Ok(Self::XyzScaling),
            "cat02" => Ok(Self::Cat02),
            "cmccat97" => Ok(Self::Cmccat97),
            "sharp" => Ok(Self::Sharp),
            "cmccat2000" => Ok(Self::Cmccat2000),
            _ => Err(Error::UnknownAdaptation(name.to_string())),
        }
    }

    /// The 3x3 cone response matrix of the method.
    pub const fn cone_matrix(self) -> Mat3 {
        match self {
            Self::Bradford => Mat3::from_rows([
                [0.8951000, 0.2664000, -0.1614000],
                [-0.7502000, 1.7135000, 0.0367000],
                [0.0389000, -0.0685000, 1.0296000],
            ]),
            Self::VonKries => Mat3::from_rows([
                [0.4002400, 0.7076000, -0.0808100],
                [-0.2263000, 1.1653200, 0.0457000],
                [0.0000000, 0.0000000, 0.9182200],
            ]),
            Self::XyzScaling => Mat3::IDENTITY,
            Self::Cat02 => Mat3::from_rows([
                [0.7328000, 0.4296000, -0.1624000],
                [-0.7036000, 1.6975000, 0.0061000],
                [0.0030000, 0.0136000, 0.9834000],
            ]),
            Self::Cmccat97 => Mat3::from_rows([
                [0.8951000, -0.7502000, 0.0389000],
                [0.2664000, 1.7135000, 0.0685000],
                [-0.1614000, 0.0367000, 1.0296000],
            ]),
            Self::Sharp => Mat3::from_rows([
                [1.2694000, -0.0988000, -0.1706000],
                [-0.8364000, 1.8006000, 0.0357000],
                [0.0297000, -0.0315000, 1.0018000],
            ]),
            Self::Cmccat2000 => Mat3::from_rows([
                [0.7982000, 0.3389000, -0.1371000],
                [-0.5918000, 1.5512000, 0.0406000],
                [0.0008000, 0.0239000, 0.9753000],
            ]),
        }
    }
}

/// Derives the adaptation matrix taking `src_white` to `dst_white`.
///
/// Fails with [`Error::DegenerateWhitePoint`] when the source cone response
/// has a zero component - a wrongly configured white, not a runtime
/// condition.
pub fn adaptation_matrix(method: Method, src_white: Vec3, dst_white: Vec3) -> Result<Mat3> {
    let m = method.cone_matrix();
    let src_cone = m * src_white;
    let dst_cone = m * dst_white;

    if src_cone.to_array().iter().any(|c| c.abs() < 1e-14) {
        return Err(Error::DegenerateWhitePoint {
            x: src_white.x,
            y: src_white.y,
            z: src_white.z,
        });
    }

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    let m_inv = m.inverse().ok_or(Error::SingularMatrix)?;
    Ok(m_inv * scale * m)
}

/// Process-lifetime cache of adaptation matrices.
///
/// Keyed by (method, source white, destination white). Entries are computed
/// lazily on first request and never evicted - the key space is small and
/// bounded by the supported whites and methods. When a direction is derived
/// its inverse is stored for the opposite key in the same insertion, so
/// `(A -> B)` and `(B -> A)` are exact matrix inverses of each other.
///
/// The cache is read-mostly after warm-up; insertion takes a write lock,
/// hits only a read lock. The conversion engine owns an instance; tests can
/// construct isolated ones.
#[derive(Debug, Default)]
pub struct AdaptationCache {
    matrices: RwLock<HashMap<(Method, White, White), Mat3>>,
}

impl AdaptationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The adaptation matrix from `src` to `dst` under `method`.
    ///
    /// Identical whites short-circuit to the identity matrix without
    /// touching the cache.
    pub fn get(&self, method: Method, src: White, dst: White) -> Result<Mat3> {
        if src == dst {
            return Ok(Mat3::IDENTITY);
        }

        let key = (method, src, dst);
        if let Some(m) = self
            .matrices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(*m);
        }

        let forward = adaptation_matrix(method, src.xyz(), dst.xyz())?;
        let inverse = forward.inverse().ok_or(Error::SingularMatrix)?;

        let mut map = self
            .matrices
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        map.entry((method, src, dst)).or_insert(forward);
        map.entry((method, dst, src)).or_insert(inverse);
        Ok(forward)
    }

    /// Adapts tristimulus values from `src` to `dst` under `method`.
    #[inline]
    pub fn adapt(&self, method: Method, src: White, dst: White, xyz: Vec3) -> Result<Vec3> {
        Ok(self.get(method, src, dst)? * xyz)
    }
}
