use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dicepath::core::{Board, GameConfig, GameController, SimpleRng};
use tui_dicepath::term::{FrameBuffer, GameView, Viewport};
use tui_dicepath::types::{Direction, Pos};

fn started(seed: u32) -> GameController {
    let mut game = GameController::new(
        GameConfig::default()
            .with_seed(seed)
            .with_obstacle_count(0),
    )
    .unwrap();
    game.start();
    game
}

fn bench_roll_cycle(c: &mut Criterion) {
    let mut game = started(12345);

    // One accepted move plus the ticks until it lands, shuttling right/left.
    c.bench_function("roll_and_land", |b| {
        b.iter(|| {
            let dir = if game.die().position().x == 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            game.move_cube(black_box(dir));
            while !game.tick() {}
            game.take_events();
        })
    });
}

fn bench_tick_idle(c: &mut Criterion) {
    let mut game = started(12345);

    c.bench_function("tick_idle", |b| {
        b.iter(|| {
            black_box(game.tick());
        })
    });
}

fn bench_generate_targets(c: &mut Criterion) {
    let mut board = Board::new(6, 6, Pos::new(0, 0)).unwrap();
    let mut rng = SimpleRng::new(7);

    c.bench_function("generate_targets", |b| {
        b.iter(|| {
            board.generate_targets(&mut rng);
        })
    });
}

fn bench_generate_obstacles(c: &mut Criterion) {
    let mut board = Board::new(6, 6, Pos::new(0, 0)).unwrap();
    let mut rng = SimpleRng::new(7);
    board.generate_targets(&mut rng);

    c.bench_function("generate_obstacles", |b| {
        b.iter(|| {
            board.generate_obstacles(black_box(Pos::new(3, 3)), &mut rng);
        })
    });
}

fn bench_move_rejected(c: &mut Criterion) {
    let mut game = started(12345);

    // Off the top edge from the start cell: always rejected.
    c.bench_function("move_rejected", |b| {
        b.iter(|| {
            black_box(game.move_cube(Direction::Up));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = started(12345);
    let view = GameView::default();
    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_roll_cycle,
    bench_tick_idle,
    bench_generate_targets,
    bench_generate_obstacles,
    bench_move_rejected,
    bench_render
);
criterion_main!(benches);
