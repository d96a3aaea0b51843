use crate::dataset::PuzzleRecord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn puzzle(rating: Option<f64>, nb_plays: Option<f64>) -> PuzzleRecord {
    PuzzleRecord { rating, nb_plays }
}

/// Generates `n` puzzles with reproducible ratings spread slightly beyond
/// the banded range, so some rows land outside every band.
/// Around 2% of ratings and 5% of play counts are missing.
pub fn generate_puzzles(n: usize, seed: u64) -> Vec<PuzzleRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let rating = if rng.random_bool(0.02) {
                None
            } else {
                Some(rng.random_range(-100.0..3300.0_f64).round())
            };
            let nb_plays = if rng.random_bool(0.05) {
                None
            } else {
                Some(rng.random_range(0..50_000) as f64)
            };

            puzzle(rating, nb_plays)
        })
        .collect()
}
