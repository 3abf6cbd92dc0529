use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use puzzle_position::game_state::game_state::GameState;
use puzzle_position::move_application::san_apply::apply_san;
use puzzle_position::puzzle::position_builder::{build_position, extract_san_moves};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    movetext: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "italian_short",
        movetext: "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. c3 Nf6 5. d4 exd4 6. cxd4 Bb4+ 7. Bd2 Bxd2+ \
                   8. Nbxd2 d5 9. exd5 Nxd5 10. Qb3 Nce7 11. O-O O-O 12. Rfe1 c6 *",
    },
    BenchCase {
        name: "nimzo_long",
        movetext: "1. d4 Nf6 2. c4 e6 3. Nc3 Bb4 4. e3 O-O 5. Bd3 d5 6. Nf3 c5 7. O-O Nc6 \
                   8. a3 Bxc3 9. bxc3 dxc4 10. Bxc4 Qc7 11. Bd3 e5 12. Qc2 Re8 13. e4 exd4 \
                   14. cxd4 Nxd4 15. Nxd4 cxd4 16. f4 Be6 17. f5 Bd7 18. Bb2 Rad8 19. Rad1 Bc6 *",
    },
];

fn bench_build_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_position");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let plies = extract_san_moves(case.movetext)
            .expect("benchmark movetext should parse")
            .len();
        group.throughput(Throughput::Elements(plies as u64));
        group.bench_with_input(
            BenchmarkId::new(case.name, format!("{plies}_plies")),
            case,
            |b, case| {
                b.iter(|| {
                    build_position(black_box(case.movetext), black_box(plies))
                        .expect("benchmark position should build")
                });
            },
        );
    }

    group.finish();
}

fn bench_apply_single_move(c: &mut Criterion) {
    let game = GameState::new_game();
    c.bench_function("apply_san_nf3", |b| {
        b.iter(|| apply_san(black_box(&game), black_box("Nf3")).expect("Nf3 should apply"))
    });
}

criterion_group!(position_builder_benches, bench_build_position, bench_apply_single_move);
criterion_main!(position_builder_benches);
