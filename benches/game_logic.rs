use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_tty::core::{Display, GameEngine, Playfield, RecordingDisplay};
use tetris_tty::term::TerminalDisplay;
use tetris_tty::types::{Color, Command};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if !engine.running() {
                engine = GameEngine::new(12345);
            }
            engine.apply(black_box(Command::SoftDropTick));
            engine.take_frame();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut playfield = Playfield::new();
            for y in 16..20 {
                playfield.fill_row_except(y, Color::Cyan, &[]);
            }
            playfield.clear_completed_lines()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(black_box(7));
            engine.apply(Command::HardDrop);
            engine.take_frame()
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            engine.try_move(black_box(1), 0, 0);
            engine.try_move(black_box(-1), 0, 0);
            engine.take_frame();
        })
    });
}

fn bench_full_redraw(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    let mut recording = RecordingDisplay::new();
    let mut terminal = TerminalDisplay::with_writer(std::io::sink(), true);

    c.bench_function("redraw_recording", |b| {
        b.iter(|| {
            engine.redraw();
            let frame = engine.take_frame();
            recording.ops.clear();
            recording.render(&frame).unwrap();
        })
    });

    c.bench_function("redraw_terminal", |b| {
        b.iter(|| {
            engine.redraw();
            let frame = engine.take_frame();
            terminal.render(&frame).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_full_redraw
);
criterion_main!(benches);
