//! StatAccumulator - Collects stat modifications before producing a StatBag

use crate::stat_block::StatBag;
use crate::types::Attribute;

/// Accumulates stat modifications from various sources
///
/// Flat modifiers are summed first; "more" multipliers are applied on top
/// of the summed value, so the result does not depend on the order sources
/// were applied in.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    /// Sum of all flat modifiers
    pub flat: StatBag,
    /// Multiplicative modifiers (as decimal, 0.5 = +50%)
    pub more: Vec<(Attribute, f64)>,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a whole bag of flat modifiers
    pub fn add_bag(&mut self, bag: &StatBag) {
        self.flat += bag;
    }

    /// Add a single flat modifier
    pub fn add_flat(&mut self, attr: Attribute, value: i32) {
        self.flat.add_flat(attr, value);
    }

    /// Add a "more" multiplier (as decimal, e.g. 0.5 for 50% more)
    pub fn add_more(&mut self, attr: Attribute, value: f64) {
        self.more.push((attr, value));
    }

    /// Total multiplier for an attribute: product of (1 + more)
    pub fn more_multiplier(&self, attr: Attribute) -> f64 {
        self.more
            .iter()
            .filter(|(a, _)| *a == attr)
            .map(|(_, m)| 1.0 + m)
            .product()
    }

    /// Produce the final bag: flat × Π(1 + more), truncated toward zero
    pub fn finish(&self) -> StatBag {
        if self.more.is_empty() {
            return self.flat;
        }

        Attribute::all()
            .iter()
            .map(|attr| {
                let value = self.flat.get(*attr) as f64 * self.more_multiplier(*attr);
                (*attr, value as i32)
            })
            .collect()
    }
}
