//! Mutable assignment of item quantities.

use super::instance::Instance;

/// An assignment of an integer quantity to every item of an [`Instance`],
/// with incrementally maintained aggregate value and weight.
///
/// Assignments that would push the weight past the capacity are rejected
/// outright, so a `Solution` is feasible at all times and the invariant
/// `weight == sum(quantity_i * weight_i)` always holds.
///
/// # Examples
///
/// ```
/// use knapsack_solvers::problem::{Instance, Solution};
///
/// let instance = Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0)], 25.0)?;
/// let mut solution = Solution::new(&instance);
/// assert!(solution.assign(0, 1));
/// assert!(!solution.assign(1, 1)); // 30 > 25, rejected
/// assert_eq!(solution.value(), 60.0);
/// # Ok::<(), knapsack_solvers::problem::InstanceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solution<'i> {
    instance: &'i Instance,
    quantities: Vec<u32>,
    value: f64,
    weight: f64,
}

impl<'i> Solution<'i> {
    /// The empty solution: every quantity zero.
    pub fn new(instance: &'i Instance) -> Self {
        Self {
            instance,
            quantities: vec![0; instance.len()],
            value: 0.0,
            weight: 0.0,
        }
    }

    /// Assigns `quantity` of the item at `index`, replacing its previous
    /// quantity. Returns `false` and leaves the solution untouched when the
    /// resulting weight would exceed the capacity.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn assign(&mut self, index: usize, quantity: u32) -> bool {
        let item = self.instance.item(index);
        let delta = f64::from(quantity) - f64::from(self.quantities[index]);
        let new_weight = self.weight + delta * item.weight();
        if new_weight > self.instance.capacity() {
            return false;
        }

        self.value += delta * item.value();
        self.weight = new_weight;
        self.quantities[index] = quantity;
        true
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn quantity(&self, index: usize) -> u32 {
        self.quantities[index]
    }

    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether the total weight is within capacity. Always true under the
    /// rejecting [`assign`](Self::assign) contract; part of the public
    /// contract nonetheless.
    pub fn is_feasible(&self) -> bool {
        self.weight <= self.instance.capacity()
    }

    /// Whether every quantity is 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.quantities.iter().all(|&q| q <= 1)
    }
}
