use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zenith::constants::STANDARD_ALTITUDE_STARS;
use zenith::coordinates::{EquatorialCoordinates, GeographicCoordinates};
use zenith::rise_transit_set::{accurate_rise_transit_set_times, rise_transit_set_times};

/// Random observer between the polar circles, so that most draws produce
/// actual rise/set events.
fn rand_site(rng: &mut StdRng) -> GeographicCoordinates {
    GeographicCoordinates::new(
        rng.random_range(-180.0..180.0),
        rng.random_range(-65.0..65.0),
    )
}

fn rand_target(rng: &mut StdRng) -> EquatorialCoordinates {
    EquatorialCoordinates::new(
        rng.random_range(0.0..360.0),
        rng.random_range(-85.0..85.0),
    )
}

fn bench_standard(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let samples = 1_000usize;

    c.bench_function("rise_transit_set/standard", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|i| {
                        (
                            2_460_000.5 + i as f64,
                            rand_target(&mut rng),
                            rand_site(&mut rng),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (jd, equ, geo) in cases {
                    let r = rise_transit_set_times(
                        black_box(jd),
                        black_box(&equ),
                        &geo,
                        STANDARD_ALTITUDE_STARS,
                    );
                    black_box(r);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_accurate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA5CE17);
    let samples = 1_000usize;

    c.bench_function("rise_transit_set/accurate_2_iterations", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|i| {
                        let mid = rand_target(&mut rng);
                        // drift the coordinates slightly day over day
                        let before = EquatorialCoordinates::new(
                            mid.right_ascension - 1.05,
                            mid.declination - 0.4,
                        );
                        let after = EquatorialCoordinates::new(
                            mid.right_ascension + 1.05,
                            mid.declination + 0.4,
                        );
                        (
                            2_460_000.5 + i as f64,
                            [before, mid, after],
                            rand_site(&mut rng),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (jd, equ, geo) in cases {
                    let r = accurate_rise_transit_set_times(
                        black_box(jd),
                        black_box(&equ),
                        &geo,
                        STANDARD_ALTITUDE_STARS,
                        2,
                    );
                    black_box(r);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_standard, bench_accurate);
criterion_main!(benches);
