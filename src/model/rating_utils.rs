use statrs::statistics::{Data, Median, Statistics};

/// Rounds to `decimals` places, ties to even. NaN passes through.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Sample (n - 1) standard deviation, NaN for fewer than two values
pub fn std_dev(values: &[f64]) -> f64 {
    values.iter().std_dev()
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    Data::new(values.to_vec()).median()
}
