use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_boulder::core::{attempt_move, fall_tick, Game, Grid};
use tui_boulder::types::{Direction, DEFAULT_LAYOUT};

/// A bordered `width x height` field of flux with a stone every seventh cell,
/// locks along the bottom row and a key next to the player.
fn large_layout(width: usize, height: usize) -> Vec<Vec<u8>> {
    let mut rows = vec![vec![1u8; width]; height];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, code) in row.iter_mut().enumerate() {
            if r == 0 || c == 0 || r == height - 1 || c == width - 1 {
                *code = 2;
            } else if r == height - 2 {
                *code = 9;
            } else if (r * width + c) % 7 == 0 {
                *code = 4;
            } else if (r * width + c) % 11 == 0 {
                *code = 0;
            }
        }
    }
    rows[1][1] = 3;
    rows[1][2] = 8;
    rows
}

fn bench_step(c: &mut Criterion) {
    let mut game = Game::new(Grid::from_codes(&DEFAULT_LAYOUT).unwrap());

    c.bench_function("step_default_layout", |b| {
        b.iter(|| {
            game.enqueue(black_box(Direction::Right));
            game.enqueue(black_box(Direction::Left));
            game.step();
        })
    });
}

fn bench_fall_pass(c: &mut Criterion) {
    let grid = Grid::from_codes(&large_layout(200, 100)).unwrap();

    c.bench_function("fall_tick_200x100", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut g| fall_tick(&mut g),
            BatchSize::SmallInput,
        )
    });
}

fn bench_key_pickup(c: &mut Criterion) {
    let grid = Grid::from_codes(&large_layout(200, 100)).unwrap();

    c.bench_function("key_pickup_scan_200x100", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut g| attempt_move(&mut g, black_box(Direction::Right)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_step, bench_fall_pass, bench_key_pickup);
criterion_main!(benches);
