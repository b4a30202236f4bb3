use criterion::{Criterion, black_box, criterion_group, criterion_main};
use embedded_graphics::pixelcolor::BinaryColor;
use pixpack_core::{BinaryGrid, Bitmap, GrayGrid, pack, unpack};

const WIDTH: usize = 128;
const HEIGHT: usize = 64;

fn checkerboard() -> BinaryGrid {
    BinaryGrid::from_fn(WIDTH, HEIGHT, |x, y| BinaryColor::from((x + y) % 2 == 0)).unwrap()
}

fn bench_pack(c: &mut Criterion) {
    let grid = checkerboard();
    c.bench_function("pack 128x64", |b| b.iter(|| pack(black_box(&grid))));
}

fn bench_unpack(c: &mut Criterion) {
    let bits = pack(&checkerboard()).into_bits();
    c.bench_function("unpack 128x64", |b| {
        b.iter(|| unpack(black_box(&bits), WIDTH, HEIGHT).unwrap())
    });
}

fn bench_from_gray(c: &mut Criterion) {
    let data = (0..WIDTH * HEIGHT).map(|i| (i % 256) as u8).collect();
    let gray = GrayGrid::new(WIDTH, HEIGHT, data).unwrap();
    c.bench_function("quantize+pack 128x64", |b| {
        b.iter(|| Bitmap::from_image(black_box(&gray)).unwrap())
    });
}

criterion_group!(benches, bench_pack, bench_unpack, bench_from_gray);
criterion_main!(benches);
