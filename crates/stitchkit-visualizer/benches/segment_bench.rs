use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stitchkit_core::{Rgb, ThreadPalette};
use stitchkit_visualizer::{ColorRamp, Segmenter, SegmenterConfig, StitchCommand, StitchEvent};

fn synthetic_stream(len: usize) -> Vec<StitchEvent> {
    (0..len)
        .map(|i| {
            let command = match i % 500 {
                0 => StitchCommand::ColorChange,
                1..=3 => StitchCommand::Jump,
                4 => StitchCommand::Trim,
                _ => StitchCommand::Stitch,
            };
            let x = (i % 1000) as f64 * 25.0;
            let y = (i / 1000) as f64 * 25.0;
            StitchEvent::new(x, y, command)
        })
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let events = synthetic_stream(100_000);

    let with_wires = Segmenter::new(SegmenterConfig::default());
    c.bench_function("segment 100k events (jump wires)", |b| {
        b.iter(|| with_wires.segment(black_box(&events)))
    });

    let without_wires = Segmenter::new(SegmenterConfig::new(10000.0, false).unwrap());
    c.bench_function("segment 100k events (hidden jumps)", |b| {
        b.iter(|| without_wires.segment(black_box(&events)))
    });
}

fn bench_color_ramp(c: &mut Criterion) {
    let palette: ThreadPalette = (0..256)
        .map(|i| Rgb::from_rgb8(i as u8, 255 - i as u8, 128))
        .collect();

    c.bench_function("color ramp 256 threads", |b| {
        b.iter(|| ColorRamp::new(black_box(&palette)))
    });
}

criterion_group!(benches, bench_segment, bench_color_ramp);
criterion_main!(benches);
