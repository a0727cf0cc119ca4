//! Problem instance: items plus a capacity bound.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A single knapsack item: an immutable (label, value, weight) tuple.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    label: String,
    value: f64,
    weight: f64,
}

impl Item {
    pub fn new(label: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            label: label.into(),
            value,
            weight,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Value-to-weight ratio. Well defined for items of a validated
    /// [`Instance`], whose weights are always positive.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }
}

/// Rejected instance data, detected once at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceError {
    /// Capacity must be positive and finite.
    InvalidCapacity(f64),
    /// Every item weight must be positive and finite.
    InvalidWeight { label: String, weight: f64 },
    /// Every item value must be non-negative and finite.
    InvalidValue { label: String, value: f64 },
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::InvalidCapacity(capacity) => {
                write!(f, "capacity must be positive and finite, got {capacity}")
            }
            InstanceError::InvalidWeight { label, weight } => {
                write!(
                    f,
                    "item '{label}': weight must be positive and finite, got {weight}"
                )
            }
            InstanceError::InvalidValue { label, value } => {
                write!(
                    f,
                    "item '{label}': value must be non-negative and finite, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// A validated 0/1 knapsack instance: an ordered collection of items and a
/// capacity bound. Read-only after construction.
///
/// # Examples
///
/// ```
/// use knapsack_solvers::problem::Instance;
///
/// let instance = Instance::from_pairs(&[(60.0, 10.0), (100.0, 20.0)], 25.0)?;
/// assert_eq!(instance.len(), 2);
/// # Ok::<(), knapsack_solvers::problem::InstanceError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    items: Vec<Item>,
    capacity: f64,
}

impl Instance {
    /// Validates and constructs an instance.
    ///
    /// Capacity must be positive, every weight positive, every value
    /// non-negative; all three finite. A zero weight would leave the
    /// value-to-weight ratio undefined.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, InstanceError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(InstanceError::InvalidCapacity(capacity));
        }
        for item in &items {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(InstanceError::InvalidWeight {
                    label: item.label.clone(),
                    weight: item.weight,
                });
            }
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(InstanceError::InvalidValue {
                    label: item.label.clone(),
                    value: item.value,
                });
            }
        }
        Ok(Self { items, capacity })
    }

    /// Constructs an instance from `(value, weight)` pairs, labelling the
    /// items `item-0`, `item-1`, ... in order.
    pub fn from_pairs(pairs: &[(f64, f64)], capacity: f64) -> Result<Self, InstanceError> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(value, weight))| Item::new(format!("item-{i}"), value, weight))
            .collect();
        Self::new(items, capacity)
    }

    /// Generates a reproducible random instance for tests and benchmarks.
    ///
    /// Values are drawn from `1..=100`, weights from `1..=50`, and the
    /// capacity is `capacity_fraction` of the total weight (at least 1).
    ///
    /// # Panics
    ///
    /// Panics if `capacity_fraction` is not positive.
    pub fn random(num_items: usize, capacity_fraction: f64, seed: u64) -> Self {
        assert!(
            capacity_fraction > 0.0,
            "capacity_fraction must be positive"
        );

        let mut rng = SmallRng::seed_from_u64(seed);
        let items: Vec<Item> = (0..num_items)
            .map(|i| {
                Item::new(
                    format!("item-{i}"),
                    rng.random_range(1..=100) as f64,
                    rng.random_range(1..=50) as f64,
                )
            })
            .collect();

        let total_weight: f64 = items.iter().map(|item| item.weight).sum();
        let capacity = (total_weight * capacity_fraction).max(1.0);

        Self { items, capacity }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}
