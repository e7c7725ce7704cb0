use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tetris_core::{Engine, Field, NullSink, ShapeGenerator};

fn running_engine(seed: u32) -> Engine<NullSink> {
    let mut engine = Engine::new(seed, NullSink);
    engine.start_new_game(0);
    engine
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("engine_tick", |b| {
        let mut engine = running_engine(42);
        b.iter(|| {
            if !engine.is_running() {
                engine.start_new_game(0);
            }
            engine.tick();
            black_box(engine.score());
        });
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    let mut field = Field::new();
    for row in 19..23 {
        for col in 0..10 {
            field.set(row, col, 1);
        }
    }
    c.bench_function("clear_four_rows", |b| {
        b.iter_batched(
            || field.clone(),
            |mut field| black_box(field.clear_full_rows()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_horizontal_moves(c: &mut Criterion) {
    c.bench_function("move_left_right", |b| {
        let mut engine = running_engine(7);
        b.iter(|| {
            engine.move_left();
            engine.move_right();
            black_box(engine.current_piece().x);
        });
    });
}

fn bench_rotation(c: &mut Criterion) {
    c.bench_function("rotate_anti_clockwise", |b| {
        let mut engine = running_engine(7);
        b.iter(|| {
            engine.rotate_anti_clockwise();
            black_box(engine.current_piece().y);
        });
    });
}

fn bench_generator_advance(c: &mut Criterion) {
    c.bench_function("generator_advance", |b| {
        let mut generator = ShapeGenerator::new(12345);
        b.iter(|| {
            generator.advance();
            black_box(generator.current().x);
        });
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_full_rows,
    bench_horizontal_moves,
    bench_rotation,
    bench_generator_advance
);
criterion_main!(benches);
