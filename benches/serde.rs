use criterion::{black_box, criterion_group, criterion_main, Criterion};

use calendric::DateTime;

fn bench_ser_datetime_string(c: &mut Criterion) {
    c.bench_function("bench_ser_datetime_string", |b| {
        let dt = DateTime::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap();
        b.iter(|| {
            black_box(serde_json::to_string(&dt)).unwrap();
        });
    });
}

fn bench_ser_datetime_writer(c: &mut Criterion) {
    c.bench_function("bench_ser_datetime_writer", |b| {
        let mut s: Vec<u8> = Vec::with_capacity(20);
        let dt = DateTime::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap();
        b.iter(|| {
            let s = &mut s;
            s.clear();
            black_box(serde_json::to_writer(s, &dt)).unwrap();
        });
    });
}

fn bench_de_datetime(c: &mut Criterion) {
    c.bench_function("bench_de_datetime", |b| {
        b.iter(|| black_box(serde_json::from_str::<DateTime>(black_box("946684800000"))).unwrap());
    });
}

criterion_group!(benches, bench_ser_datetime_writer, bench_ser_datetime_string, bench_de_datetime);
criterion_main!(benches);
