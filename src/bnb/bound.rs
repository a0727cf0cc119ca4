//! Fractional-relaxation upper bound.

use crate::problem::rank::RankedItem;

/// Upper bound on the best value reachable from a partial assignment that
/// has decided items `0..depth` of `order` and accumulated `value` and
/// `weight` so far.
///
/// Undecided items are added greedily in ratio order while they fit whole;
/// the first item that no longer fits contributes the fraction of its value
/// matching the remaining capacity. This is the classical LP-relaxation
/// bound for 0/1 knapsack: no integral completion can exceed it, so pruning
/// against it never discards an optimal solution.
pub(crate) fn fractional_bound(
    order: &[RankedItem],
    capacity: f64,
    depth: usize,
    value: f64,
    weight: f64,
) -> f64 {
    let mut bound = value;
    let mut remaining = capacity - weight;

    for item in &order[depth..] {
        if item.weight <= remaining {
            remaining -= item.weight;
            bound += item.value;
        } else {
            bound += remaining * item.ratio;
            break;
        }
    }

    bound
}
