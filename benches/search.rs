use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

use tab::eval::evaluate;
use tab::search::Searcher;
use tab::selfplay::play_game;
use tab::{Board, Difficulty, MatchConfig, PlayerConfig, Side};

/// Positions from a seeded random game on a 6-column board
fn corpus() -> Vec<Board> {
    let config = MatchConfig {
        columns: 6,
        max_throws: 120,
        side_a: PlayerConfig::from_difficulty(Difficulty::Easy),
        side_b: PlayerConfig::from_difficulty(Difficulty::Easy),
        ..MatchConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(1337);
    let mut boards = vec![Board::new(config.columns).unwrap()];
    let _ = play_game(&config, &mut rng, |game, _| boards.push(game.board().clone()));
    boards
}

fn bench_evaluate(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("eval/evaluate", |bch| {
        bch.iter(|| {
            let mut acc = 0i64;
            for board in &boards {
                acc += i64::from(evaluate(board, Side::SideA));
            }
            black_box(acc)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let boards = corpus();
    let mut group = c.benchmark_group("search/minimax");
    for depth in [1u8, 2, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bch, &depth| {
            bch.iter(|| {
                let mut nodes = 0u64;
                for board in &boards {
                    for throw in [1, 2, 3] {
                        let result = Searcher::new(Side::SideB).search(board, throw, depth);
                        nodes += result.stats.nodes;
                    }
                }
                black_box(nodes)
            })
        });
    }
    group.finish();
}

criterion_group!(search, bench_evaluate, bench_search);
criterion_main!(search);
