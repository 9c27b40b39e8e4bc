//! Interval bounds and bin labeling
//!
//! A finished attribute is described entirely by its sorted split list;
//! every bin is the half-open interval `(splits[i-1]; splits[i]]` with the
//! first and last bins unbounded. Lookup is a binary search so labeling a
//! row costs O(log k) in the number of bins.

/// One end of a half-open interval on the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Bounded(f64),
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Unbounded => write!(f, "inf"),
            Bound::Bounded(v) => write!(f, "{}", v),
        }
    }
}

/// Index of the bin `value` falls into.
///
/// Splits are inclusive upper bounds of the bin to their left: a value
/// exactly equal to a split maps to the lower bin, a value infinitesimally
/// greater maps to the next one.
pub fn bin_index(value: f64, splits: &[f64]) -> usize {
    splits.partition_point(|&s| s < value)
}

/// Bound pair `(lower, upper)` of the bin at `idx`.
pub fn bin_bounds(idx: usize, splits: &[f64]) -> (Bound, Bound) {
    let lower = if idx == 0 {
        Bound::Unbounded
    } else {
        Bound::Bounded(splits[idx - 1])
    };
    let upper = if idx == splits.len() {
        Bound::Unbounded
    } else {
        Bound::Bounded(splits[idx])
    };
    (lower, upper)
}

/// Render the interval containing `value` as `(lower; upper]`.
///
/// With no splits every value lives in the single unbounded interval
/// `(-inf; inf)`.
pub fn bin_label(value: f64, splits: &[f64]) -> String {
    render_bin(bin_index(value, splits), splits)
}

/// All bin labels for a split list, ordered left to right.
pub fn labels_for_splits(splits: &[f64]) -> Vec<String> {
    (0..=splits.len()).map(|idx| render_bin(idx, splits)).collect()
}

fn render_bin(idx: usize, splits: &[f64]) -> String {
    match bin_bounds(idx, splits) {
        (Bound::Unbounded, Bound::Unbounded) => "(-inf; inf)".to_string(),
        (Bound::Unbounded, Bound::Bounded(u)) => format!("(-inf; {}]", u),
        (Bound::Bounded(l), Bound::Unbounded) => format!("({}; inf)", l),
        (Bound::Bounded(l), Bound::Bounded(u)) => format!("({}; {}]", l, u),
    }
}
