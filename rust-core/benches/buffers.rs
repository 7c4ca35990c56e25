use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectral_buffers::{RealVector, Smpl, SpectralVector};

const FFT_SIZE: usize = 2048;

fn bench_access_tiers(c: &mut Criterion) {
    let mut v = SpectralVector::new(FFT_SIZE).unwrap();
    v.ones_norm();
    let length = v.length();

    let mut group = c.benchmark_group("read_norm");
    group.bench_function("indexed", |b| {
        b.iter(|| {
            let mut acc: Smpl = 0.0;
            for i in 0..length {
                acc += v.read_norm(black_box(i));
            }
            acc
        })
    });
    group.bench_function("unchecked", |b| {
        b.iter(|| {
            let mut acc: Smpl = 0.0;
            for i in 0..length {
                // Loop bound is the vector's own length
                acc += unsafe { v.read_norm_unchecked(black_box(i)) };
            }
            acc
        })
    });
    group.bench_function("checked", |b| {
        b.iter(|| {
            let mut acc: Smpl = 0.0;
            for i in 0..length {
                acc += v.try_read_norm(black_box(i)).unwrap_or(0.0);
            }
            acc
        })
    });
    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut src = SpectralVector::new(FFT_SIZE).unwrap();
    let mut dst = SpectralVector::new(FFT_SIZE).unwrap();
    let mut real = RealVector::new(FFT_SIZE).unwrap();

    c.bench_function("set_all_norm", |b| b.iter(|| src.set_all_norm(black_box(0.5))));
    c.bench_function("zeros_all", |b| b.iter(|| dst.zeros_all()));
    c.bench_function("copy_to", |b| b.iter(|| src.copy_to(&mut dst)));
    c.bench_function("real_set_all", |b| b.iter(|| real.set_all(black_box(0.25))));
}

criterion_group!(benches, bench_access_tiers, bench_bulk);
criterion_main!(benches);
