use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use statwire::StatRecord;

fn record_with_msg(msg_len: usize) -> StatRecord {
    StatRecord::new("user", "login", 10.01, 1, 200, "x".repeat(msg_len))
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    // Typical event (64-byte message)
    let small = record_with_msg(64);
    group.throughput(Throughput::Bytes(64));
    group.bench_function("encode_64b", |b| {
        b.iter(|| {
            black_box(statwire::encode(&small).unwrap());
        });
    });

    // Verbose event (1 KB message)
    let medium = record_with_msg(1024);
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("encode_1kb", |b| {
        b.iter(|| {
            black_box(statwire::encode(&medium).unwrap());
        });
    });

    // Full datagram (message hits the 65507-byte cap)
    let large = record_with_msg(statwire::MAX_DATAGRAM_SIZE);
    group.throughput(Throughput::Bytes(statwire::MAX_DATAGRAM_SIZE as u64));
    group.bench_function("encode_max", |b| {
        b.iter(|| {
            black_box(statwire::encode(&large).unwrap());
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let small = statwire::encode(&record_with_msg(64)).unwrap();
    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("decode_64b", |b| {
        b.iter(|| {
            black_box(statwire::decode(&small).unwrap());
        });
    });

    let medium = statwire::encode(&record_with_msg(1024)).unwrap();
    group.throughput(Throughput::Bytes(medium.len() as u64));
    group.bench_function("decode_1kb", |b| {
        b.iter(|| {
            black_box(statwire::decode(&medium).unwrap());
        });
    });

    let large = statwire::encode(&record_with_msg(statwire::MAX_DATAGRAM_SIZE)).unwrap();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("decode_max", |b| {
        b.iter(|| {
            black_box(statwire::decode(&large).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
