//! StatBag - Additive attribute container
//!
//! A `StatBag` maps every [`Attribute`] to an integer modifier. Absent keys
//! read as zero, and composing two bags is a per-key sum, so the order in
//! which sources are combined never changes the result.

mod aggregator;

pub use aggregator::StatAccumulator;

use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index};

/// Integer modifiers keyed by attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Attribute, i32>", into = "BTreeMap<Attribute, i32>")]
pub struct StatBag {
    values: [i32; Attribute::COUNT],
}

impl StatBag {
    /// Create an empty bag (every attribute zero)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from `(attribute, value)` pairs; repeated keys are summed
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Attribute, i32)>) -> Self {
        let mut bag = Self::new();
        for (attr, value) in pairs {
            bag.add_flat(attr, value);
        }
        bag
    }

    /// Builder-style setter
    pub fn with(mut self, attr: Attribute, value: i32) -> Self {
        self.set(attr, value);
        self
    }

    /// Get the value of an attribute (zero if never set)
    pub fn get(&self, attr: Attribute) -> i32 {
        self.values[attr.index()]
    }

    /// Overwrite the value of an attribute
    pub fn set(&mut self, attr: Attribute, value: i32) {
        self.values[attr.index()] = value;
    }

    /// Add to the value of an attribute, saturating at the `i32` bounds
    pub fn add_flat(&mut self, attr: Attribute, value: i32) {
        let slot = &mut self.values[attr.index()];
        *slot = slot.saturating_add(value);
    }

    /// Whether every attribute is zero
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }

    /// Iterate over non-zero entries in attribute order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all()
            .iter()
            .map(|attr| (*attr, self.get(*attr)))
            .filter(|(_, v)| *v != 0)
    }
}

impl Add for StatBag {
    type Output = StatBag;

    fn add(mut self, rhs: StatBag) -> StatBag {
        self += rhs;
        self
    }
}

impl AddAssign for StatBag {
    fn add_assign(&mut self, rhs: StatBag) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs = lhs.saturating_add(rhs);
        }
    }
}

impl<'a> AddAssign<&'a StatBag> for StatBag {
    fn add_assign(&mut self, rhs: &'a StatBag) {
        *self += *rhs;
    }
}

impl Sum for StatBag {
    fn sum<I: Iterator<Item = StatBag>>(iter: I) -> StatBag {
        iter.fold(StatBag::new(), |acc, bag| acc + bag)
    }
}

impl<'a> Sum<&'a StatBag> for StatBag {
    fn sum<I: Iterator<Item = &'a StatBag>>(iter: I) -> StatBag {
        iter.copied().sum()
    }
}

impl Index<Attribute> for StatBag {
    type Output = i32;

    fn index(&self, attr: Attribute) -> &i32 {
        &self.values[attr.index()]
    }
}

impl From<BTreeMap<Attribute, i32>> for StatBag {
    fn from(map: BTreeMap<Attribute, i32>) -> Self {
        StatBag::from_pairs(map)
    }
}

impl From<StatBag> for BTreeMap<Attribute, i32> {
    fn from(bag: StatBag) -> Self {
        bag.iter().collect()
    }
}

impl FromIterator<(Attribute, i32)> for StatBag {
    fn from_iter<I: IntoIterator<Item = (Attribute, i32)>>(iter: I) -> Self {
        StatBag::from_pairs(iter)
    }
}

impl fmt::Display for StatBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Attribute::all()
            .iter()
            .map(|attr| format!("{}:{}", attr, self.get(*attr)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absent_keys_are_zero() {
        let bag = StatBag::new().with(Attribute::Str, 12);
        assert_eq!(bag.get(Attribute::Str), 12);
        assert_eq!(bag.get(Attribute::Resist), 0);
        assert_eq!(bag[Attribute::Agi], 0);
    }

    #[test]
    fn test_from_pairs_sums_repeats() {
        let bag = StatBag::from_pairs([(Attribute::Con, 4), (Attribute::Con, 6)]);
        assert_eq!(bag.get(Attribute::Con), 10);
    }

    #[test]
    fn test_add_is_per_key() {
        let a = StatBag::new().with(Attribute::Str, 5).with(Attribute::Armor, 2);
        let b = StatBag::new().with(Attribute::Str, 3).with(Attribute::Int, 7);
        let total = a + b;
        assert_eq!(total.get(Attribute::Str), 8);
        assert_eq!(total.get(Attribute::Armor), 2);
        assert_eq!(total.get(Attribute::Int), 7);
    }

    #[test]
    fn test_composition_saturates() {
        let huge = StatBag::new().with(Attribute::Str, i32::MAX).with(Attribute::Agi, i32::MIN);
        let total = huge + huge;
        assert_eq!(total.get(Attribute::Str), i32::MAX);
        assert_eq!(total.get(Attribute::Agi), i32::MIN);

        let mut bag = StatBag::new().with(Attribute::Con, i32::MAX - 1);
        bag.add_flat(Attribute::Con, 10);
        assert_eq!(bag.get(Attribute::Con), i32::MAX);
    }

    #[test]
    fn test_serde_uses_attribute_keys() {
        let bag = StatBag::new().with(Attribute::Str, 25).with(Attribute::WeaponDamage, 12);
        let json = serde_json::to_string(&bag).unwrap();
        assert_eq!(json, r#"{"STR":25,"weapon_damage":12}"#);

        let back: StatBag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bag);
    }

    #[test]
    fn test_toml_stat_table() {
        let bag: StatBag = toml::from_str("STR = 3\nAGI = -2\n").unwrap();
        assert_eq!(bag.get(Attribute::Str), 3);
        assert_eq!(bag.get(Attribute::Agi), -2);
    }

    fn arb_bag() -> impl Strategy<Value = StatBag> {
        prop::collection::vec(-1000i32..1000, Attribute::COUNT).prop_map(|vals| {
            Attribute::all().iter().copied().zip(vals).collect()
        })
    }

    proptest! {
        #[test]
        fn prop_composition_commutes(a in arb_bag(), b in arb_bag()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn prop_composition_associates(a in arb_bag(), b in arb_bag(), c in arb_bag()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn prop_empty_is_identity(a in arb_bag()) {
            prop_assert_eq!(a + StatBag::new(), a);
        }
    }
}
