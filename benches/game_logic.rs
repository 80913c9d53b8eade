use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match4::core::{resolve_matches, Board, GameSnapshot, GameState};
use tui_match4::types::{BlockColor, BOARD_COLUMNS, PALETTE, VISIBLE_ROWS};

/// A full visible area with no runs of 4 anywhere.
fn busy_board() -> Board {
    let mut board = Board::new();
    for col in 0..BOARD_COLUMNS as i8 {
        for row in 0..VISIBLE_ROWS as i8 {
            let i = (col as usize * 2 + row as usize * 3) % PALETTE.len();
            board.set(col, row, Some(PALETTE[i]));
        }
    }
    board
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_match_scan(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("match_scan_no_hits", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(resolve_matches(&mut board));
        })
    });

    c.bench_function("match_scan_four_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 0..4 {
                for col in 0..BOARD_COLUMNS as i8 {
                    board.set(col, row, Some(BlockColor::Red));
                }
            }
            black_box(resolve_matches(&mut board));
        })
    });
}

fn bench_compact(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("compact_sparse", |b| {
        b.iter(|| {
            let mut board = board.clone();
            for col in 0..BOARD_COLUMNS as i8 {
                board.set(col, 1, None);
                board.set(col, 4, None);
            }
            board.compact();
            black_box(&board);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_match_scan,
    bench_compact,
    bench_snapshot
);
criterion_main!(benches);
