use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snake::core::Game;
use snake::term::{GameView, Viewport};
use snake::types::GameStatus;

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("tick_20x20", |b| {
        b.iter(|| {
            if game.tick() == GameStatus::GameOver {
                game.start();
            }
            black_box(game.snake().len());
        })
    });
}

fn bench_start(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("start", |b| {
        b.iter(|| {
            game.start();
            black_box(game.food());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();
    let view = GameView::default();

    c.bench_function("render_80x24", |b| {
        b.iter(|| black_box(view.render(&game, Viewport::new(80, 24))))
    });
}

criterion_group!(benches, bench_tick, bench_start, bench_render);
criterion_main!(benches);
