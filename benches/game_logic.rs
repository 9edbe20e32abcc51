use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_pairs::core::{Board, Layout, Session};
use tui_pairs::term::{BoardView, Viewport};
use tui_pairs::types::CellPos;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_12x12", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| Board::generate(black_box(12), black_box(12), &mut rng).unwrap())
    });
}

fn bench_cell_at(c: &mut Criterion) {
    let layout = Layout::new(4, 4, 64, 24);
    c.bench_function("cell_at_hit_and_miss", |b| {
        b.iter(|| {
            let hit = layout.cell_at(black_box(32), black_box(12));
            let miss = layout.cell_at(black_box(0), black_box(0));
            (hit, miss)
        })
    });
}

fn bench_playthrough(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let board = Board::generate(4, 4, &mut rng).unwrap();

    // Click order that matches every pair, derived once from the deal.
    let mut clicks: Vec<CellPos> = Vec::new();
    for icon in 0..board.pair_count() as u8 {
        for (idx, &id) in board.icons().iter().enumerate() {
            if id == icon {
                clicks.push(CellPos::new((idx % 4) as u8, (idx / 4) as u8));
            }
        }
    }

    c.bench_function("playthrough_4x4", |b| {
        b.iter(|| {
            let mut session = Session::new(board.clone());
            for &pos in &clicks {
                session.handle_click(black_box(Some(pos)));
            }
            assert!(session.is_won());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let session = Session::new(Board::generate(4, 4, &mut rng).unwrap());
    let layout = Layout::new(4, 4, 80, 24);
    let view = BoardView;

    c.bench_function("render_scene_80x24", |b| {
        b.iter(|| {
            view.render(
                session.board(),
                session.revealed(),
                &layout,
                Viewport::new(80, 24),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_cell_at,
    bench_playthrough,
    bench_render
);
criterion_main!(benches);
