use criterion::{black_box, criterion_group, criterion_main, Criterion};
use horipad_proto::{ButtonStates, Frame, FRAME_SENTINEL};

pub fn bench_frame_decode(c: &mut Criterion) {
    let raw = [FRAME_SENTINEL, 0x00, 0x00, 0x00, 0xEF, 0xFF];
    let mut states = ButtonStates::new();

    c.bench_function("frame_parse_and_apply", |b| {
        b.iter(|| {
            let frame = Frame::parse(black_box(&raw)).unwrap();
            states.apply_word(frame.button_word());
            black_box(&states);
        });
    });
}

criterion_group!(benches, bench_frame_decode);
criterion_main!(benches);
