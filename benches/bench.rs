// Criterion benchmarks for the OSAA long-haul analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use osaa_longhaul::core::{distance::haversine_distance, Analysis, Annotator, TeamEntries, TurnaroundReport};
use osaa_longhaul::models::Matchup;
use osaa_longhaul::services::sample_matchups;

/// Sample matchups repeated across extra seasons to get a larger batch
fn create_matchups(copies: usize) -> Vec<Matchup> {
    let base = sample_matchups();
    (0..copies)
        .flat_map(|i| {
            base.iter().map(move |m| {
                let mut m = m.clone();
                m.year += (i * 4) as u16;
                m
            })
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(44.5646),
                black_box(-123.2620),
                black_box(45.6721),
                black_box(-118.7886),
            )
        });
    });
}

fn bench_annotate(c: &mut Criterion) {
    let annotator = Annotator::default();
    let mut group = c.benchmark_group("annotate");

    for copies in [1, 10, 50].iter() {
        let matchups = create_matchups(*copies);

        group.bench_with_input(BenchmarkId::new("annotate_all", matchups.len()), &matchups, |b, matchups| {
            b.iter(|| annotator.annotate_all(black_box(matchups.clone())));
        });
    }

    group.finish();
}

fn bench_turnaround(c: &mut Criterion) {
    let annotator = Annotator::default();
    let games = annotator.annotate_all(create_matchups(10)).games;

    c.bench_function("turnaround_report", |b| {
        b.iter(|| {
            let entries = TeamEntries::from_games(black_box(&games));
            TurnaroundReport::from_entries(&entries)
        });
    });

    let regional = Analysis::default_regional_teams();
    c.bench_function("full_analysis_sample", |b| {
        b.iter(|| Analysis::run(&annotator, black_box(sample_matchups()), &regional));
    });
}

criterion_group!(benches, bench_haversine_distance, bench_annotate, bench_turnaround);
criterion_main!(benches);
