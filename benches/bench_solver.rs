use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Context, Dictionary, Move, PlacedTile, Point, Solver};

const WORDS: &[&str] = &[
    "a", "at", "ate", "eat", "eats", "ha", "hat", "hate", "hates", "he", "heat", "heats", "sat",
    "sea", "seat", "set", "tea", "teas", "the",
];

fn played_board() -> Board {
    let board = Board::standard();
    let tiles: Vec<PlacedTile> = "heat"
        .chars()
        .enumerate()
        .map(|(i, c)| PlacedTile::new(c, Point::new(5 + i as isize, 7)))
        .collect();
    board.execute_move(&Move::new(&tiles)).unwrap()
}

fn bench_build_dictionary(c: &mut Criterion) {
    c.bench_function("dictionary.from_words", |b| {
        b.iter(|| Dictionary::from_words(WORDS))
    });
}

fn bench_opening_move(c: &mut Criterion) {
    let context = Context::new(
        Board::standard(),
        Dictionary::from_words(WORDS),
        "ehastea".parse().unwrap(),
    );
    let solver = Solver::default();
    c.bench_function("solver.opening_move", |b| {
        b.iter(|| solver.solve(&context).unwrap())
    });
}

fn bench_midgame_move(c: &mut Criterion) {
    let context = Context::new(
        played_board(),
        Dictionary::from_words(WORDS),
        "ehastea".parse().unwrap(),
    );
    let solver = Solver::default();
    c.bench_function("solver.midgame_move", |b| {
        b.iter(|| solver.solve(&context).unwrap())
    });
}

fn bench_seed_scan(c: &mut Criterion) {
    let context = Context::new(
        played_board(),
        Dictionary::from_words(WORDS),
        "ehastea".parse().unwrap(),
    );
    let solver = Solver::default();
    c.bench_function("solver.best_terminal_state", |b| {
        b.iter(|| solver.best_terminal_state(&context).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_build_dictionary(c);
    bench_opening_move(c);
    bench_midgame_move(c);
    bench_seed_scan(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
