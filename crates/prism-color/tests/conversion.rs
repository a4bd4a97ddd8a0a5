//! Conversion validation against reference values.
//!
//! The fixed tuples below are independently published conversions of a few
//! pinned sRGB colors (CSS Color 4 sample data at full f64 precision).
//! They pin down the matrix derivations, the transfer curves, the Oklab
//! pipeline, and the D50 adaptation leg all at once.

use approx::assert_relative_eq;
use prism_color::Converter;
use prism_core::{Channel, Space, wrap3};
use prism_math::White;

struct Representations {
    srgb: [f64; 3],
    linear_srgb: [f64; 3],
    p3: [f64; 3],
    oklab: [f64; 3],
    oklch_lc: [f64; 2],
    oklch_hue: Option<f64>,
    xyz: [f64; 3],
}

// #ffca00
const YELLOW: Representations = Representations {
    srgb: [1.0, 0.792156862745098, 0.0],
    linear_srgb: [1.0, 0.5906188409193369, 0.0],
    p3: [0.967346220711791, 0.8002244967941964, 0.27134084647161244],
    oklab: [
        0.8613332073307732,
        0.0017175723640959761,
        0.17600139371700052,
    ],
    oklch_lc: [0.8613332073307732, 0.1760097742886813],
    oklch_hue: Some(89.440876452466),
    xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
};

// #3178ea
const BLUE: Representations = Representations {
    srgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
    linear_srgb: [
        0.030713443732993635,
        0.18782077230067787,
        0.8227857543962835,
    ],
    p3: [0.26851535563550943, 0.4644576150842869, 0.8876966971452301],
    oklab: [0.5909012953108558, -0.03348086515869664, -0.1836287492414715],
    oklch_lc: [0.5909012953108558, 0.18665606306724153],
    oklch_hue: Some(259.66681920272595),
    xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
};

const WHITE: Representations = Representations {
    srgb: [1.0, 1.0, 1.0],
    linear_srgb: [1.0, 1.0, 1.0],
    p3: [1.0, 1.0, 1.0],
    oklab: [1.0, 0.0, 0.0],
    oklch_lc: [1.0, 0.0],
    oklch_hue: None,
    xyz: [0.9504559270516716, 1.0, 1.0890577507598784],
};

fn assert_coords(actual: &[Channel; 3], expected: &[f64; 3], epsilon: f64) {
    for i in 0..3 {
        assert_relative_eq!(
            actual[i].resolve(f64::NAN),
            expected[i],
            epsilon = epsilon,
            max_relative = 1e-6
        );
    }
}

#[test]
fn reference_conversions() {
    let engine = Converter::new();

    for color in [&YELLOW, &BLUE, &WHITE] {
        let srgb = wrap3(color.srgb);

        let linear = engine.convert(&srgb, Space::Srgb, Space::SrgbLinear).unwrap();
        assert_coords(&linear, &color.linear_srgb, 1e-9);

        let xyz = engine.convert(&srgb, Space::Srgb, Space::XyzD65).unwrap();
        assert_coords(&xyz, &color.xyz, 1e-9);

        let p3 = engine.convert(&srgb, Space::Srgb, Space::DisplayP3).unwrap();
        assert_coords(&p3, &color.p3, 1e-7);

        let oklab = engine.convert(&srgb, Space::Srgb, Space::Oklab).unwrap();
        assert_coords(&oklab, &color.oklab, 1e-7);

        let oklch = engine.convert(&srgb, Space::Srgb, Space::Oklch).unwrap();
        assert_relative_eq!(
            oklch[0].resolve(f64::NAN),
            color.oklch_lc[0],
            epsilon = 1e-7
        );
        assert_relative_eq!(
            oklch[1].resolve(f64::NAN),
            color.oklch_lc[1],
            epsilon = 1e-7
        );
        match color.oklch_hue {
            Some(hue) => {
                assert_relative_eq!(oklch[2].resolve(f64::NAN), hue, epsilon = 1e-5);
            }
            None => assert!(oklch[2].is_undefined(), "white must have no hue"),
        }

        // And back again.
        let back = engine.convert(&oklch, Space::Oklch, Space::Srgb).unwrap();
        assert_coords(&back, &color.srgb, 1e-9);
    }
}

#[test]
fn lab_reference_values() {
    let engine = Converter::new();
    // CSS Color 4 sample conversion of sRGB red, D50 frame.
    let lab = engine
        .convert(&wrap3([1.0, 0.0, 0.0]), Space::Srgb, Space::Lab)
        .unwrap();
    assert_relative_eq!(lab[0].resolve(f64::NAN), 54.29, epsilon = 0.05);
    assert_relative_eq!(lab[1].resolve(f64::NAN), 80.81, epsilon = 0.05);
    assert_relative_eq!(lab[2].resolve(f64::NAN), 69.89, epsilon = 0.05);
}

#[test]
fn srgb_white_lands_on_d50_white_in_xyz_d50() {
    let engine = Converter::new();
    let out = engine
        .convert(&wrap3([1.0, 1.0, 1.0]), Space::Srgb, Space::XyzD50)
        .unwrap();
    let d50 = White::D50.xyz();
    assert_relative_eq!(out[0].resolve(f64::NAN), d50.x, epsilon = 1e-9);
    assert_relative_eq!(out[1].resolve(f64::NAN), d50.y, epsilon = 1e-9);
    assert_relative_eq!(out[2].resolve(f64::NAN), d50.z, epsilon = 1e-9);
}

#[test]
fn identity_conversion_is_exact() {
    let engine = Converter::new();
    for space in Space::ALL {
        let coords = [
            Channel::Value(0.123456789),
            Channel::Value(0.5),
            Channel::Undefined,
        ];
        let out = engine.convert(&coords, space, space).unwrap();
        assert_eq!(out, coords, "identity must be exact for {space}");
    }
}

#[test]
fn achromatic_rectangular_to_polar() {
    let engine = Converter::new();
    let lch = engine
        .convert(&wrap3([50.0, 0.0, 0.0]), Space::Lab, Space::Lch)
        .unwrap();
    assert_eq!(lch[0].resolve(f64::NAN), 50.0);
    assert_eq!(lch[1].resolve(f64::NAN), 0.0);
    assert!(lch[2].is_undefined());
}

#[test]
fn negative_chroma_behaves_as_zero() {
    let engine = Converter::new();
    let negative = engine
        .convert(&wrap3([50.0, -5.0, 20.0]), Space::Lch, Space::Lab)
        .unwrap();
    let zero = engine
        .convert(&wrap3([50.0, 0.0, 20.0]), Space::Lch, Space::Lab)
        .unwrap();
    assert_eq!(negative, zero);
}

#[test]
fn undefined_hue_resolves_to_zero_going_back() {
    let engine = Converter::new();
    let gray = [Channel::Value(60.0), Channel::Value(0.0), Channel::Undefined];
    let lab = engine.convert(&gray, Space::Lch, Space::Lab).unwrap();
    assert_eq!(lab[1].resolve(f64::NAN), 0.0);
    assert_eq!(lab[2].resolve(f64::NAN), 0.0);
}

#[test]
fn gray_survives_polar_roundtrip() {
    let engine = Converter::new();
    let gray = wrap3([0.5, 0.5, 0.5]);
    let oklch = engine.convert(&gray, Space::Srgb, Space::Oklch).unwrap();
    assert!(oklch[2].is_undefined());

    let back = engine.convert(&oklch, Space::Oklch, Space::Srgb).unwrap();
    for i in 0..3 {
        assert_relative_eq!(back[i].resolve(f64::NAN), 0.5, epsilon = 1e-9);
    }
}

#[test]
fn multi_hop_chain_roundtrip() {
    let engine = Converter::new();
    // hwb -> hsv -> hsl -> srgb -> srgb-linear -> xyz-d65 -> xyz-d50 -> lab
    let hwb = wrap3([20.0, 0.1, 0.2]);
    let lab = engine.convert(&hwb, Space::Hwb, Space::Lab).unwrap();
    let back = engine.convert(&lab, Space::Lab, Space::Hwb).unwrap();
    for i in 0..3 {
        assert_relative_eq!(
            back[i].resolve(f64::NAN),
            hwb[i].resolve(f64::NAN),
            epsilon = 1e-8
        );
    }
}

#[test]
fn isolated_engines_agree() {
    // The CAT cache is engine state; two engines must still produce
    // identical results.
    let a = Converter::new();
    let b = Converter::new();
    let coords = wrap3([0.3, 0.6, 0.9]);
    let out_a = a.convert(&coords, Space::Srgb, Space::ProPhotoRgb).unwrap();
    let out_b = b.convert(&coords, Space::Srgb, Space::ProPhotoRgb).unwrap();
    assert_eq!(out_a, out_b);
}
