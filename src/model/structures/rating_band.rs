use std::{convert::TryFrom, fmt};

use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::model::constants::RATING_BAND_EDGES;

/// Puzzle difficulty bucket. Ordering follows the rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount)]
#[repr(u8)]
pub enum RatingBand {
    Under1000 = 0,
    From1000To1200 = 1,
    From1200To1400 = 2,
    From1400To1500 = 3,
    From1500To1600 = 4,
    From1600To1800 = 5,
    From1800To2000 = 6,
    From2000To2200 = 7,
    From2200To2400 = 8,
    Over2400 = 9
}

impl RatingBand {
    /// Finds the band whose interval `(lower, upper]` contains `rating`.
    ///
    /// Ratings at or below the first edge, above the last edge, or NaN
    /// have no band.
    pub fn from_rating(rating: f64) -> Option<RatingBand> {
        // Index of the first edge >= rating
        let upper = RATING_BAND_EDGES.partition_point(|&edge| edge < rating);

        if upper == 0 || upper == RATING_BAND_EDGES.len() {
            return None;
        }

        RatingBand::try_from(upper - 1).ok()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Under1000 => "<1000",
            RatingBand::From1000To1200 => "1000-1200",
            RatingBand::From1200To1400 => "1200-1400",
            RatingBand::From1400To1500 => "1400-1500",
            RatingBand::From1500To1600 => "1500-1600",
            RatingBand::From1600To1800 => "1600-1800",
            RatingBand::From1800To2000 => "1800-2000",
            RatingBand::From2000To2200 => "2000-2200",
            RatingBand::From2200To2400 => "2200-2400",
            RatingBand::Over2400 => "2400+"
        }
    }

    /// Lower (exclusive) and upper (inclusive) rating bounds
    pub fn bounds(&self) -> (f64, f64) {
        let i = *self as usize;
        (RATING_BAND_EDGES[i], RATING_BAND_EDGES[i + 1])
    }
}

impl TryFrom<usize> for RatingBand {
    type Error = ();

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        RatingBand::iter().nth(v).ok_or(())
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for RatingBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
