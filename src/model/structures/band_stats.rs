use serde::Serialize;

use super::rating_band::RatingBand;

/// Aggregates for the puzzles falling into one [`RatingBand`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandStats {
    pub band: RatingBand,
    pub count: usize,
    /// Rounded to whole rating points
    pub mean_rating: f64,
    /// Sample standard deviation, rounded. NaN for single-puzzle bands
    pub std_rating: f64,
    /// Puzzles in the band with a known play count
    pub nm_plays: usize,
    pub total_plays: f64,
    /// Share of all rows in the dataset, not only the banded ones
    pub percentage: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_puzzles: usize,
    pub mean_rating: f64,
    pub median_rating: f64,
    pub total_plays: f64,
    /// Rows without a rating or with a rating outside every band
    pub unbanded: usize
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingReport {
    pub bands: Vec<BandStats>,
    pub summary: DatasetSummary
}
