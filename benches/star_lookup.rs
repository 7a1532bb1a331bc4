use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flate2::{write::GzEncoder, Compression};

use astrocat::StarLookup;

const STAR_COUNT: u32 = 20_000;

/// Synthetic `hip_main.dat` line carrying the columns read by the default parser.
fn synthetic_line(hip: u32) -> String {
    let ra = (hip as f64 * 0.017) % 360.0;
    let dec = (hip as f64 * 0.0071) % 180.0 - 90.0;
    format!(
        "H|{hip:>12}| |{:11}|{:11}|{vmag:>5.2}| | |{ra:>12.8}|{dec:>+12.8}| |{plx:>7.2}|{pm:>8.2}|{pm:>8.2}|",
        "",
        "",
        vmag = 4.0 + (hip % 80) as f64 / 10.0,
        plx = 1.0 + (hip % 500) as f64 / 10.0,
        pm = -12.5,
    )
}

/// Write the synthetic catalog twice, plain and gzip, returning both paths.
fn write_catalogs(dir: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let content: String = (1..=STAR_COUNT)
        .map(|hip| synthetic_line(hip) + "\n")
        .collect();

    let plain = dir.join("hip_main.dat");
    std::fs::write(&plain, &content).unwrap();

    let gz = dir.join("hip_main.dat.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&gz).unwrap(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();

    (plain, gz)
}

fn bench_star_lookup(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let (plain, gz) = write_catalogs(Utf8Path::from_path(dir.path()).unwrap());

    let lookup = StarLookup::from_file(&plain).unwrap();
    let compressed = StarLookup::from_file(&gz).unwrap();
    let last = STAR_COUNT.to_string();

    c.bench_function("star_lookup/get_one_last_plain", |b| {
        b.iter(|| lookup.get_one(black_box(&last)).unwrap())
    });

    c.bench_function("star_lookup/get_one_last_gzip", |b| {
        b.iter(|| compressed.get_one(black_box(&last)).unwrap())
    });

    let wanted: Vec<String> = (1..=STAR_COUNT).step_by(97).map(|hip| hip.to_string()).collect();
    c.bench_function("star_lookup/get_many_plain", |b| {
        b.iter(|| lookup.get_many(black_box(&wanted)).unwrap())
    });

    c.bench_function("star_lookup/scan_all_plain", |b| {
        b.iter(|| lookup.scan(|_| true).unwrap().count())
    });
}

criterion_group!(benches, bench_star_lookup);
criterion_main!(benches);
