//! Resistance - Magical damage mitigation
//!
//! Resist works like armor (flat reduction per point) up to a threshold.
//! At or above `full_resist_threshold` a magical hit is negated entirely
//! and reported as resisted instead of dealing the 1-damage minimum.

use crate::config::DamageConstants;
use crate::stat_block::StatBag;
use crate::types::{Attribute, DamageKind};

/// Flat reduction from resist: `resist × resist_mitigation`
pub fn resist_mitigation(defender: &StatBag, constants: &DamageConstants) -> f64 {
    let resist = defender.get(Attribute::Resist).max(0) as f64;
    resist * constants.resist_mitigation
}

/// Whether a hit of this kind is negated by the defender's resist
pub fn is_fully_resisted(defender: &StatBag, kind: DamageKind, constants: &DamageConstants) -> bool {
    kind == DamageKind::Magical && defender.get(Attribute::Resist) >= constants.full_resist_threshold
}
