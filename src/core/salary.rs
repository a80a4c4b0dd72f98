use crate::domain::model::SalaryRange;

// "from 100k" postings tend to undersell, "up to 100k" postings to oversell.
const LOWER_ONLY_FACTOR: f64 = 1.2;
const UPPER_ONLY_FACTOR: f64 = 0.8;

/// Estimate a single salary figure from optional bounds. Zero bounds count
/// as unspecified. Returns `None` when neither bound is usable.
pub fn estimate(from: Option<u64>, to: Option<u64>) -> Option<f64> {
    let from = from.filter(|v| *v > 0);
    let to = to.filter(|v| *v > 0);

    match (from, to) {
        (Some(lo), Some(hi)) => Some((lo + hi) as f64 / 2.0),
        (Some(lo), None) => Some(lo as f64 * LOWER_ONLY_FACTOR),
        (None, Some(hi)) => Some(hi as f64 * UPPER_ONLY_FACTOR),
        (None, None) => None,
    }
}

pub fn estimate_range(range: &SalaryRange) -> Option<f64> {
    estimate(range.from, range.to)
}
