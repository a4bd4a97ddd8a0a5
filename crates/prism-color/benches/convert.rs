//! Conversion and gamut-mapping throughput.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use prism_color::Converter;
use prism_core::{Space, wrap3};

fn bench_convert(c: &mut Criterion) {
    let engine = Converter::new();
    let srgb = wrap3([0.372, 0.65, 0.91]);

    c.bench_function("srgb_to_oklch", |b| {
        b.iter(|| {
            engine
                .convert(black_box(&srgb), Space::Srgb, Space::Oklch)
                .unwrap()
        })
    });

    c.bench_function("srgb_to_lab_with_adaptation", |b| {
        b.iter(|| {
            engine
                .convert(black_box(&srgb), Space::Srgb, Space::Lab)
                .unwrap()
        })
    });

    c.bench_function("hwb_to_rec2020_full_chain", |b| {
        let hwb = wrap3([200.0, 0.2, 0.1]);
        b.iter(|| {
            engine
                .convert(black_box(&hwb), Space::Hwb, Space::Rec2020)
                .unwrap()
        })
    });
}

fn bench_fit(c: &mut Criterion) {
    let engine = Converter::new();
    let out_of_gamut = wrap3([1.2, -0.1, 0.95]);

    c.bench_function("fit_clip", |b| {
        b.iter(|| {
            engine
                .fit(black_box(&out_of_gamut), Space::Srgb, "clip")
                .unwrap()
        })
    });

    c.bench_function("fit_oklch_chroma", |b| {
        b.iter(|| {
            engine
                .fit(black_box(&out_of_gamut), Space::Srgb, "oklch-chroma")
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_convert, bench_fit);
criterion_main!(benches);
