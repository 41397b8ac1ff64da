//! Defense system - Armor, Resist, Evasion

mod armour;
mod evasion;
mod resistance;

pub use armour::armor_mitigation;
pub use evasion::{accuracy_rating, evasion_rating, hit_chance, sigmoid_opposed};
pub use resistance::{is_fully_resisted, resist_mitigation};

use crate::config::DamageConstants;
use crate::stat_block::StatBag;
use crate::types::DamageKind;

/// Flat damage reduction the defender applies against a damage kind
pub fn mitigation(defender: &StatBag, kind: DamageKind, constants: &DamageConstants) -> f64 {
    match kind {
        DamageKind::Physical => armor_mitigation(defender, constants),
        DamageKind::Magical => resist_mitigation(defender, constants),
        DamageKind::True => 0.0,
    }
}
