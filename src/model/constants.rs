// Rating band edges. Band i covers (EDGES[i], EDGES[i + 1]]
pub const RATING_BAND_EDGES: [f64; 11] = [
    0.0, 1000.0, 1200.0, 1400.0, 1500.0, 1600.0, 1800.0, 2000.0, 2200.0, 2400.0, 3000.0
];
// Rounding applied to the per-band table
pub const RATING_DECIMALS: i32 = 0;
pub const PERCENTAGE_DECIMALS: i32 = 2;
