//! StatSource - Trait and implementations for stat providers

mod base_stats;
mod gear;

pub use base_stats::BaseStatsSource;
pub use gear::GearSource;

use crate::stat_block::{StatAccumulator, StatBag};

/// Trait for anything that contributes stats to a combatant
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Gear: 0
    /// - Status effects: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}

/// Fold a set of sources into one bag, applying them in priority order
pub fn aggregate(sources: &[&dyn StatSource]) -> StatBag {
    let mut sorted: Vec<_> = sources.to_vec();
    sorted.sort_by_key(|s| s.priority());

    let mut accumulator = StatAccumulator::new();
    for source in sorted {
        source.apply(&mut accumulator);
    }
    accumulator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::StatusEffect;
    use crate::equipment::Item;
    use crate::types::{Attribute, EquipmentSlot};

    #[test]
    fn test_aggregate_layers_every_source() {
        let base = StatBag::new().with(Attribute::Str, 10).with(Attribute::Con, 8);
        let belt = Item::new("Belt", EquipmentSlot::Legs, StatBag::new().with(Attribute::Str, 4));
        let rage = StatusEffect::rage("self", 0.0);

        let base_source = BaseStatsSource::new(&base);
        let gear_source = GearSource::new(EquipmentSlot::Legs, &belt);
        // Listed out of priority order on purpose
        let sources: [&dyn StatSource; 3] = [&rage, &gear_source, &base_source];

        let total = aggregate(&sources);
        assert_eq!(total.get(Attribute::Str), 21);
        assert_eq!(total.get(Attribute::Con), 8);
    }

    #[test]
    fn test_aggregate_of_nothing_is_empty() {
        assert!(aggregate(&[]).is_empty());
    }
}
