//! Ratio-sorted item ordering shared by the solvers.

use super::instance::Instance;

/// An item index paired with the data the solvers read in sorted order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankedItem {
    /// Original index into the instance.
    pub index: usize,
    pub value: f64,
    pub weight: f64,
    pub ratio: f64,
}

/// The items of `instance` sorted by descending value-to-weight ratio.
///
/// Ties are broken by ascending original index, so the order (and with it
/// the search) is deterministic.
pub(crate) fn ratio_order(instance: &Instance) -> Vec<RankedItem> {
    let mut order: Vec<RankedItem> = instance
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| RankedItem {
            index,
            value: item.value(),
            weight: item.weight(),
            ratio: item.ratio(),
        })
        .collect();

    // Ratios of a validated instance are finite, so total_cmp agrees with
    // the usual order on f64.
    order.sort_by(|a, b| b.ratio.total_cmp(&a.ratio).then(a.index.cmp(&b.index)));
    order
}
