//! Greedy supervised discretization of a single attribute
//!
//! The attribute's value range is partitioned by recursive binary splitting
//! of a sorted (value, label) sequence. Each iteration scores every midpoint
//! candidate in every current interval by the number of cross-side sample
//! pairs with differing labels, then accepts the globally best cut. The
//! loop runs until `n_bins - 1` cuts are placed or no informative cut
//! remains.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;
use thiserror::Error;

use super::intervals::Bound;

/// Non-fatal conditions that end or skip split selection.
///
/// Both are normal termination paths surfaced to the caller as diagnostics,
/// never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
pub enum DiscretizeWarning {
    /// Fewer than 2 bins requested - a valid no-op request.
    #[error("fewer than 2 bins requested, attribute kept as a single interval")]
    BinsBelowTwo,
    /// All remaining candidates have zero gain, or no candidate exists.
    #[error("no further informative split found, stopped early")]
    NoInformativeSplit,
}

/// One accepted cut together with the gain it achieved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChosenSplit {
    pub cut: f64,
    pub gain: u64,
}

/// Result of discretizing one attribute.
///
/// `splits` is the finished boundary list, sorted ascending and strictly
/// increasing. `chosen` records the cuts in greedy acceptance order, which
/// is a stable prefix across increasing bin counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscretizeOutcome {
    pub splits: Vec<f64>,
    pub chosen: Vec<ChosenSplit>,
    pub warnings: Vec<DiscretizeWarning>,
}

/// A contiguous region of the value axis holding its member samples.
///
/// Samples stay sorted by value so a split is a single `split_off` at the
/// cut's partition point.
struct Interval<L> {
    #[allow(dead_code)] // kept for symmetry; only the split list is published
    lower: Bound,
    upper: Bound,
    samples: Vec<(f64, L)>,
}

/// Midpoint cut candidates between adjacent distinct values.
///
/// `sorted` must be sorted by value. Equal-valued neighbors contribute no
/// candidate, so no zero-width split can ever be proposed. Subsets with
/// fewer than two distinct values produce an empty list.
pub fn candidate_cuts<L>(sorted: &[(f64, L)]) -> Vec<f64> {
    sorted
        .windows(2)
        .filter(|w| w[0].0 != w[1].0)
        .map(|w| (w[0].0 + w[1].0) / 2.0)
        .collect()
}

/// Number of cross-side sample pairs with differing labels for `cut`.
///
/// Left is `value <= cut`, right is `value > cut`. Computed from per-label
/// counts as `|left| * |right| - sum(count_left[l] * count_right[l])`
/// rather than by enumerating the cross product; this is the hot inner
/// loop of the whole search.
pub fn separation_gain<L: Eq + Hash>(subset: &[(f64, L)], cut: f64) -> u64 {
    let mut left: HashMap<&L, u64> = HashMap::new();
    let mut right: HashMap<&L, u64> = HashMap::new();

    for (value, label) in subset {
        let side = if *value <= cut { &mut left } else { &mut right };
        *side.entry(label).or_insert(0) += 1;
    }

    let total_left: u64 = left.values().sum();
    let total_right: u64 = right.values().sum();
    let total_pairs = total_left * total_right;

    let matching_pairs: u64 = left
        .iter()
        .filter_map(|(label, n)| right.get(label).map(|m| n * m))
        .sum();

    debug_assert!(matching_pairs <= total_pairs);
    total_pairs - matching_pairs
}

/// Discretize one attribute into at most `n_bins` intervals.
///
/// Returns the sorted split list plus a diagnostics record; the caller
/// decides how to surface warnings. `n_bins < 2` returns immediately with
/// an empty split list.
pub fn discretize_attribute<L: Eq + Hash + Clone>(
    samples: &[(f64, L)],
    n_bins: usize,
) -> DiscretizeOutcome {
    let mut outcome = DiscretizeOutcome::default();

    if n_bins < 2 {
        outcome.warnings.push(DiscretizeWarning::BinsBelowTwo);
        return outcome;
    }

    let mut sorted: Vec<(f64, L)> = samples.to_vec();
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut intervals = vec![Interval {
        lower: Bound::Unbounded,
        upper: Bound::Unbounded,
        samples: sorted,
    }];
    let mut splits: Vec<f64> = Vec::new();

    for _ in 0..n_bins - 1 {
        // Globally best (gain, cut, interval) across all current intervals.
        // Strict comparison keeps the first candidate in enumeration order
        // on ties, so the result is deterministic.
        let mut best: Option<(u64, f64, usize)> = None;

        for (idx, interval) in intervals.iter().enumerate() {
            for cut in candidate_cuts(&interval.samples) {
                // Guard against re-proposing an already chosen boundary.
                if splits.contains(&cut) {
                    continue;
                }
                let gain = separation_gain(&interval.samples, cut);
                if best.map_or(true, |(g, _, _)| gain > g) {
                    best = Some((gain, cut, idx));
                }
            }
        }

        // A zero-gain cut separates nothing; treat it the same as having
        // no candidate at all.
        let Some((gain, cut, idx)) = best.filter(|(g, _, _)| *g > 0) else {
            outcome.warnings.push(DiscretizeWarning::NoInformativeSplit);
            break;
        };

        splits.push(cut);
        outcome.chosen.push(ChosenSplit { cut, gain });

        // Replace the winning interval with its left child in place and
        // append the right child; interval order is not observable, only
        // the final sorted split list is.
        let parent = &mut intervals[idx];
        let at = parent.samples.partition_point(|(v, _)| *v <= cut);
        let right_samples = parent.samples.split_off(at);
        let upper = std::mem::replace(&mut parent.upper, Bound::Bounded(cut));
        intervals.push(Interval {
            lower: Bound::Bounded(cut),
            upper,
            samples: right_samples,
        });
    }

    splits.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    outcome.splits = splits;
    outcome
}
