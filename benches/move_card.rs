use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kanban_tui::domain::{
    board::{Board, BoardSeed, CardId, ColumnId, ColumnSeed},
    drag::{DragEnd, DraggableLocation},
};

fn large_board(columns: usize, cards_per_column: usize) -> Board {
    let seed = BoardSeed {
        columns: (1..=columns)
            .map(|c| ColumnSeed {
                id: ColumnId::new(format!("column-{c}")),
                title: format!("Column {c}"),
                cards: (1..=cards_per_column)
                    .map(|n| format!("Task {c}-{n}"))
                    .collect(),
            })
            .collect(),
    };
    Board::from_seed(&seed).unwrap_or_else(|_| Board::initial())
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_card");
    for cards_per_column in [10, 1_000, 10_000] {
        let board = large_board(8, cards_per_column);
        let first = ColumnId::from("column-1");
        let last = ColumnId::from("column-8");
        let card_id = CardId::from("card-1");

        let across = DragEnd::new(
            card_id.clone(),
            DraggableLocation::new(first.clone(), 0),
            Some(DraggableLocation::new(last, cards_per_column / 2)),
        );
        group.bench_with_input(
            BenchmarkId::new("across-columns", cards_per_column),
            &across,
            |b, drag| b.iter(|| board.move_card(black_box(drag))),
        );

        let within = DragEnd::new(
            card_id,
            DraggableLocation::new(first.clone(), 0),
            Some(DraggableLocation::new(first, cards_per_column - 1)),
        );
        group.bench_with_input(
            BenchmarkId::new("within-column", cards_per_column),
            &within,
            |b, drag| b.iter(|| board.move_card(black_box(drag))),
        );
    }
    group.finish();

    let board = large_board(8, 1_000);
    let column = ColumnId::from("column-3");
    c.bench_function("add_card", |b| {
        b.iter(|| board.add_card(black_box(&column), black_box("New task")))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
