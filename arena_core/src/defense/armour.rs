//! Armor - Flat physical damage reduction

use crate::config::DamageConstants;
use crate::stat_block::StatBag;
use crate::types::Attribute;

/// Flat reduction from armor: `armor × armor_mitigation`
///
/// Negative armor never adds damage; it simply provides no reduction.
pub fn armor_mitigation(defender: &StatBag, constants: &DamageConstants) -> f64 {
    let armor = defender.get(Attribute::Armor).max(0) as f64;
    armor * constants.armor_mitigation
}
