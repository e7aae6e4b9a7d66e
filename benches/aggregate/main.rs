use bench_report::analysis::{aggregate_durations, clean_records, coerce_records};
use bench_report::common::CleanRecord;
use bench_report::parsing::read_timing_csv;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const ALGORITHMS: [&str; 6] = ["bfs", "dfs", "astar", "idastar", "greedy", "beam"];
const INPUT_FILES: [&str; 8] = [
    "p01.txt", "p02.txt", "p03.txt", "p04.txt", "p05.txt", "p06.txt", "p07.txt", "p08.txt",
];

fn make_csv(rows: usize) -> String {
    let mut csv = String::from("Algorithm,InputFile,Duration_sec\n");
    for i in 0..rows {
        // Every 50th duration is malformed so cleaning has work to do
        let duration = if i % 50 == 0 {
            "timeout".to_string()
        } else {
            format!("{}", (i % 997) as f64 * 0.013)
        };
        csv.push_str(&format!(
            "{},{},{}\n",
            ALGORITHMS[i % ALGORITHMS.len()],
            INPUT_FILES[(i / ALGORITHMS.len()) % INPUT_FILES.len()],
            duration
        ));
    }
    csv
}

fn make_clean(rows: usize) -> Vec<CleanRecord> {
    let table = read_timing_csv(make_csv(rows).as_bytes()).unwrap();
    clean_records(coerce_records(&table).unwrap()).0
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_durations");
    for rows in [1_000, 100_000] {
        let records = make_clean(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &records, |b, records| {
            b.iter(|| aggregate_durations(black_box(records)))
        });
    }
    group.finish();
}

fn bench_load_and_clean(c: &mut Criterion) {
    let csv = make_csv(100_000);
    c.bench_function("load_and_clean_100000", |b| {
        b.iter(|| {
            let table = read_timing_csv(black_box(csv.as_bytes())).unwrap();
            clean_records(coerce_records(&table).unwrap())
        })
    });
}

criterion_group!(benches, bench_aggregate, bench_load_and_clean);
criterion_main!(benches);
