use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use blocky::board::colour::REAL_RED;
use blocky::board::Direction;
use blocky::{Board, Goal};

const DEPTH: u8 = 6;

fn seeded_board() -> Board {
    let mut rng = SmallRng::seed_from_u64(1234);
    Board::new_random_tree(DEPTH, 750.0, &mut rng).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_depth_6", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| Board::new_random_tree(black_box(DEPTH), 750.0, &mut rng).unwrap())
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let board = seeded_board();
    c.bench_function("rasterize_depth_6", |b| b.iter(|| black_box(&board).rasterize()));
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = seeded_board();
    c.bench_function("rotate_root", |b| {
        b.iter(|| {
            let root = board.root();
            board.rotate(black_box(root), Direction::Clockwise).unwrap()
        })
    });
}

fn bench_goals(c: &mut Criterion) {
    let board = seeded_board();
    let grid = board.rasterize();
    let blob = Goal::blob(REAL_RED);
    let perimeter = Goal::perimeter(REAL_RED);
    c.bench_function("blob_score_grid", |b| b.iter(|| blob.score_grid(black_box(&grid))));
    c.bench_function("perimeter_score_grid", |b| {
        b.iter(|| perimeter.score_grid(black_box(&grid)))
    });
    c.bench_function("blob_score_board", |b| b.iter(|| blob.score(black_box(&board))));
}

criterion_group!(benches, bench_generate, bench_rasterize, bench_rotate, bench_goals);
criterion_main!(benches);
