//! Damage calculation - turning attacker stats into a damage number

use crate::config::{CritConstants, DamageConstants};
use crate::defense::sigmoid_opposed;
use crate::stat_block::StatBag;
use crate::types::{Attribute, DamageKind};

/// Damage contributed by the offense stat (STR or INT)
pub fn offense_bonus(attacker: &StatBag, kind: DamageKind, constants: &DamageConstants) -> f64 {
    match kind.offense_stat() {
        Some(attr) => attacker.get(attr) as f64 * constants.offense_scaling,
        None => 0.0,
    }
}

/// Raw damage before crits and mitigation: `weapon_damage + offense × scaling`
pub fn raw_damage(attacker: &StatBag, kind: DamageKind, constants: &DamageConstants) -> f64 {
    attacker.get(Attribute::WeaponDamage) as f64 + offense_bonus(attacker, kind, constants)
}

/// Chance (percent) to crit: attacker DEX vs defender AGI
pub fn crit_chance(attacker: &StatBag, defender: &StatBag, constants: &CritConstants) -> f64 {
    sigmoid_opposed(
        attacker.get(Attribute::Dex) as f64,
        defender.get(Attribute::Agi) as f64,
        constants.base,
        constants.ceiling,
        constants.steepness,
    )
}

/// Damage dealt by a connecting hit, never below 1
///
/// A NaN input also yields 1.
pub fn final_damage(raw: f64, mitigation: f64) -> u32 {
    let dealt = (raw - mitigation).floor();
    if !(dealt >= 1.0) {
        1
    } else {
        dealt as u32
    }
}
