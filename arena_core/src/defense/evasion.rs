//! Evasion - Opposed accuracy vs evasion hit chance
//!
//! Every opposed roll uses one bounded logistic curve:
//!
//! `chance = base + (ceiling - base) / (1 + e^(-k × (attack - defense)))`
//!
//! The result is a percentage that approaches `ceiling` when the attacker
//! dominates and `base` when the defender does. With equal ratings it sits
//! halfway between the two. Raising the defender's rating never raises the
//! chance.
//!
//! Ratings:
//! - accuracy = attacker DEX + AGI + flat accuracy
//! - evasion = defender AGI

use crate::config::HitConstants;
use crate::stat_block::StatBag;
use crate::types::Attribute;

/// Bounded logistic curve used for all opposed rolls (percent)
pub fn sigmoid_opposed(attack: f64, defense: f64, base: f64, ceiling: f64, k: f64) -> f64 {
    base + (ceiling - base) / (1.0 + (-k * (attack - defense)).exp())
}

/// Attacker's accuracy rating
pub fn accuracy_rating(attacker: &StatBag) -> f64 {
    attacker.get(Attribute::Dex) as f64
        + attacker.get(Attribute::Agi) as f64
        + attacker.get(Attribute::Accuracy) as f64
}

/// Defender's evasion rating
pub fn evasion_rating(defender: &StatBag) -> f64 {
    defender.get(Attribute::Agi) as f64
}

/// Chance (percent) that an attack connects
pub fn hit_chance(attacker: &StatBag, defender: &StatBag, constants: &HitConstants) -> f64 {
    sigmoid_opposed(
        accuracy_rating(attacker),
        evasion_rating(defender),
        constants.base,
        constants.ceiling,
        constants.steepness,
    )
}
