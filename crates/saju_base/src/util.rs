//! Shared numeric helpers.

/// Round to one decimal place, halves away from zero.
///
/// Every reported score in this crate passes through here so that equal
/// inputs always print and classify identically.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Share of `part` in `whole` as a percentage rounded to one decimal.
pub fn percent1(part: f64, whole: f64) -> f64 {
    round1(part * 100.0 / whole)
}
