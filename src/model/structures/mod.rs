pub mod band_stats;
pub mod rating_band;
