//! 스캔 결과 코덱 벤치마크
//!
//! 태그드 디코드/인코드, untranslated 승격 성능을 측정합니다.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ironscan_scan_results::{decode_translated, decode_untranslated, encode_translated, ingest};

const LICENSE: &str = r#"{"type":"license","data":{"license":{"name":"MIT","type":[{"name":"MIT","confidence":1.0}]}}}"#;

const UNTRANSLATED_VIRUS: &str = r#"{"clam_av_details":{"clamav_db_version":"Tue Apr 24 12:26:01 2018","clamav_version":"ClamAV 0.99.4"},"clamav":{"data_read":"2.78 MB","data_scanned":"4.66 MB","engine_version":"0.99.4","file_notes":{"empty_file":["/workspace/a","/workspace/b"]},"infected_files":0,"known_viruses":6480116,"scanned_directories":132,"scanned_files":305,"time":"18.655 sec"}}"#;

/// n개의 의존성을 가진 dependency 결과 생성
fn generate_dependency_results(count: usize) -> String {
    let deps: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"name":"package-{i}","version":"1.{i}.0","latest_version":"2.0.0","org":"org-{}","type":"maven","package":"jar","scope":"compile","requirement":">=1.0","dependencies":[{{"name":"child-{i}","version":"0.1.0"}}]}}"#,
                i % 10
            )
        })
        .collect();
    format!(
        r#"{{"type":"dependency","data":{{"dependencies":[{}],"meta":{{"first_degree_count":{count},"no_version_count":0,"total_unique_count":{},"update_available_count":{count}}}}}}}"#,
        deps.join(","),
        count * 2
    )
}

fn bench_decode_translated(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_translated");

    group.throughput(Throughput::Elements(1));
    group.bench_function("license", |b| {
        b.iter(|| decode_translated(black_box(LICENSE.as_bytes())).unwrap())
    });

    for count in [10usize, 100, 1000] {
        let input = generate_dependency_results(count);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("dependency", count),
            &input,
            |b, input| b.iter(|| decode_translated(black_box(input.as_bytes())).unwrap()),
        );
    }

    group.finish();
}

fn bench_encode_translated(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_translated");

    for count in [10usize, 100, 1000] {
        let result = decode_translated(generate_dependency_results(count).as_bytes()).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("dependency", count),
            &result,
            |b, result| b.iter(|| encode_translated(black_box(result)).unwrap()),
        );
    }

    group.finish();
}

fn bench_untranslated(c: &mut Criterion) {
    let mut group = c.benchmark_group("untranslated");
    group.throughput(Throughput::Elements(1));

    group.bench_function("decode_virus", |b| {
        b.iter(|| decode_untranslated(black_box(UNTRANSLATED_VIRUS.as_bytes())).unwrap())
    });

    // 디코드 + 승격
    group.bench_function("ingest_virus", |b| {
        b.iter(|| ingest(black_box(UNTRANSLATED_VIRUS.as_bytes())).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_translated,
    bench_encode_translated,
    bench_untranslated
);
criterion_main!(benches);
