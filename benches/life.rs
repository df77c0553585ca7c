use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use life_room::{
    Board, Controller, InputEvent, LifeBoard, MemorySurface, Size, input::RIGHT_ARROW,
    place_glider,
};

const DISPLAY: Size = Size::new(200, 60);

fn seeded_board(width: usize, height: usize) -> Board {
    let mut board = Board::new(width, height);
    for row in (0..height.saturating_sub(3)).step_by(6) {
        for col in (0..width.saturating_sub(3)).step_by(6) {
            place_glider(&mut board, row, col);
        }
    }
    board
}

fn board_advance(c: &mut Criterion) {
    let board = seeded_board(256, 256);
    c.bench_function("board_advance_256", |b| {
        b.iter_batched_ref(
            || board.clone(),
            |board| {
                board.advance();
                black_box(board.population())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn controller_session(c: &mut Criterion) {
    let script = session_script();
    c.bench_function("controller_session", |b| {
        b.iter(|| {
            let mut controller = Controller::new(DISPLAY).expect("controller");
            let mut surface = MemorySurface::new(DISPLAY).with_input(black_box(script.clone()));
            controller.run(&mut surface).expect("scripted run");
            black_box(controller.generation())
        });
    });
}

fn session_script() -> Vec<Option<InputEvent>> {
    let mut script = Vec::new();
    for _ in 0..8 {
        script.push(Some(InputEvent::char('g')));
        for _ in 0..4 {
            script.push(Some(InputEvent::key(RIGHT_ARROW)));
        }
    }
    script.push(Some(InputEvent::char('s')));
    script.extend(std::iter::repeat_n(None, 50));
    script.push(Some(InputEvent::char('q')));
    script
}

criterion_group!(benches, board_advance, controller_session);
criterion_main!(benches);
