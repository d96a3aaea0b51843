use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::dataset::PuzzleRecord;

use self::{
    constants::{PERCENTAGE_DECIMALS, RATING_DECIMALS},
    rating_utils::{mean, median, round_to, std_dev},
    structures::{
        band_stats::{BandStats, DatasetSummary, RatingReport},
        rating_band::RatingBand
    }
};

pub mod constants;
pub mod rating_utils;
pub mod structures;

/// Running totals for one band while scanning the dataset
#[derive(Debug, Default)]
struct BandAccumulator {
    ratings: Vec<f64>,
    nm_plays: usize,
    total_plays: f64
}

/// Buckets every puzzle into its [`RatingBand`] and computes the per-band
/// table along with the whole-dataset summary.
///
/// # Notes
/// Bands without puzzles are left out of [`RatingReport::bands`].
/// Percentages are relative to every row, including unbanded ones.
pub fn aggregate(puzzles: &[PuzzleRecord]) -> RatingReport {
    info!("Aggregating {} puzzles into rating bands", puzzles.len());

    let mut bands: BTreeMap<RatingBand, BandAccumulator> = BTreeMap::new();
    let mut ratings = Vec::with_capacity(puzzles.len());
    let mut total_plays = 0.0;
    let mut unbanded = 0;

    for puzzle in puzzles {
        let rating = puzzle.rating.filter(|r| !r.is_nan());
        let plays = puzzle.nb_plays.filter(|p| !p.is_nan());

        if let Some(p) = plays {
            total_plays += p;
        }

        let Some(r) = rating else {
            unbanded += 1;
            continue;
        };
        ratings.push(r);

        match RatingBand::from_rating(r) {
            Some(band) => {
                let acc = bands.entry(band).or_default();
                acc.ratings.push(r);

                if let Some(p) = plays {
                    acc.nm_plays += 1;
                    acc.total_plays += p;
                }
            }
            None => unbanded += 1
        }
    }

    if unbanded > 0 {
        warn!("{} puzzles have no rating or a rating outside every band", unbanded);
    }

    let total = puzzles.len();
    let band_stats = bands
        .into_iter()
        .map(|(band, acc)| {
            let count = acc.ratings.len();
            debug!("Band {}: {} puzzles", band, count);

            BandStats {
                band,
                count,
                mean_rating: round_to(mean(&acc.ratings), RATING_DECIMALS),
                std_rating: round_to(std_dev(&acc.ratings), RATING_DECIMALS),
                nm_plays: acc.nm_plays,
                total_plays: acc.total_plays,
                percentage: round_to(count as f64 / total as f64 * 100.0, PERCENTAGE_DECIMALS)
            }
        })
        .collect();

    RatingReport {
        bands: band_stats,
        summary: DatasetSummary {
            total_puzzles: total,
            mean_rating: mean(&ratings),
            median_rating: median(&ratings),
            total_plays,
            unbanded
        }
    }
}
