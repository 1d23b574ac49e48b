use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use castlink_core::{compress, decode, encode};

fn payload(len: usize) -> Vec<u8> {
    let mut seed = 0x9E37_79B9_7F4A_7C15u64;
    let mut out: Vec<u8> = (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed as u8
        })
        .collect();
    if let Some(first) = out.first_mut() {
        *first |= 1;
    }
    out
}

fn bench_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix62");
    group.sample_size(10);

    for len in [1 << 10, 64 << 10, 1 << 20] {
        let bytes = payload(len);
        let token = encode(&bytes);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("encode", len), &bytes, |b, bytes| {
            b.iter(|| encode(black_box(bytes)))
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &token, |b, token| {
            b.iter(|| decode(black_box(token)))
        });
    }
    group.finish();
}

fn bench_share_payload(c: &mut Criterion) {
    let mut text = String::from("{\"version\": 2, \"width\": 80, \"height\": 24}\n");
    for i in 0..5_000 {
        text.push_str(&format!("[{:.3}, \"o\", \"frame {i}\\r\\n\"]\n", i as f64 * 0.04));
    }

    c.bench_function("compress+encode", |b| {
        b.iter(|| {
            let packed = compress(black_box(&text)).map(|p| encode(&p));
            black_box(packed)
        })
    });
}

criterion_group!(benches, bench_radix, bench_share_payload);
criterion_main!(benches);
