//! CIE XYZ spaces: the D65 anchor and its D50 sibling.
//!
//! XYZ D65 is the root of the conversion tree - the one descriptor with no
//! base. XYZ D50 shares the same coordinate frame; its transforms are the
//! identity and the engine performs the chromatic adaptation implied by the
//! differing declared whites.

use crate::descriptor::{ChannelDef, SpaceDescriptor, identity3, no_normalize};
use prism_core::{ChannelBound, Space};
use prism_math::White;

/// CIE XYZ at D65, the conversion anchor.
pub(crate) static XYZ_D65: SpaceDescriptor = SpaceDescriptor {
    space: Space::XyzD65,
    name: "xyz-d65",
    serialize: "xyz-d65",
    channels: [
        ChannelDef::new("x", ChannelBound::unbounded(0.0, 1.0)),
        ChannelDef::new("y", ChannelBound::unbounded(0.0, 1.0)),
        ChannelDef::new("z", ChannelBound::unbounded(0.0, 1.0)),
    ],
    white: White::D65,
    base: None,
    to_base: identity3,
    from_base: identity3,
    normalize: no_normalize,
};

/// CIE XYZ at D50.
pub(crate) static XYZ_D50: SpaceDescriptor = SpaceDescriptor {
    space: Space::XyzD50,
    name: "xyz-d50",
    serialize: "xyz-d50",
    channels: [
        ChannelDef::new("x", ChannelBound::unbounded(0.0, 1.0)),
        ChannelDef::new("y", ChannelBound::unbounded(0.0, 1.0)),
        ChannelDef::new("z", ChannelBound::unbounded(0.0, 1.0)),
    ],
    white: White::D50,
    base: Some(Space::XyzD65),
    to_base: identity3,
    from_base: identity3,
    normalize: no_normalize,
};
