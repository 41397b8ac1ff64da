//! Attack resolution - Hit check, damage and application to the target

use super::result::ActionResult;
use crate::combatant::Combatant;
use crate::damage::{crit_chance, final_damage, raw_damage};
use crate::defense::{hit_chance, is_fully_resisted, mitigation};
use crate::encounter::Encounter;
use crate::error::{CombatError, Result};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Per-skill adjustments to a standard attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Multiplier applied to raw damage before crits and mitigation
    #[serde(deserialize_with = "deserialize_multiplier")]
    pub damage_multiplier: f64,
    /// Skip the hit check entirely
    pub guaranteed_hit: bool,
}

impl Default for AttackProfile {
    fn default() -> Self {
        AttackProfile {
            damage_multiplier: 1.0,
            guaranteed_hit: false,
        }
    }
}

impl AttackProfile {
    /// A NaN or infinite multiplier falls back to 1.0; negatives clamp to 0.0
    pub fn new(damage_multiplier: f64, guaranteed_hit: bool) -> Self {
        let damage_multiplier = if damage_multiplier.is_finite() {
            damage_multiplier.max(0.0)
        } else {
            1.0
        };
        AttackProfile {
            damage_multiplier,
            guaranteed_hit,
        }
    }
}

/// Damage multipliers read from data must be finite and non-negative
pub(crate) fn deserialize_multiplier<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "damage multiplier must be finite and non-negative, got {value}"
        )))
    }
}

/// Standard attack with no modifiers
pub fn basic_attack(
    actor: &Combatant,
    target: &mut Combatant,
    encounter: &mut Encounter,
    round: u32,
) -> Result<ActionResult> {
    resolve_attack(actor, target, encounter, round, &AttackProfile::default())
}

/// Resolve one attack from `actor` against `target`
///
/// Validation happens before anything is mutated:
/// 1. The actor must be alive
/// 2. The target must be alive
/// 3. `round` must not precede the encounter's last accepted round
///
/// Then the hit check, crit roll and mitigation run against both sides'
/// combat stats and the damage is applied to the target. The result is
/// labelled "Basic Attack" until the calling skill stamps it.
pub fn resolve_attack(
    actor: &Combatant,
    target: &mut Combatant,
    encounter: &mut Encounter,
    round: u32,
    profile: &AttackProfile,
) -> Result<ActionResult> {
    if !actor.is_alive() {
        return Err(CombatError::ActorDefeated {
            actor: actor.name().to_string(),
        });
    }
    if !target.is_alive() {
        return Err(CombatError::InvalidTarget {
            target: target.name().to_string(),
        });
    }
    encounter.begin_action(round)?;

    let attacker = actor.combat_stats();
    let defender = target.combat_stats();
    let kind = actor.damage_kind();

    let constants = encounter.constants();
    let to_hit = hit_chance(&attacker, &defender, &constants.hit);
    let to_crit = crit_chance(&attacker, &defender, &constants.crit);
    let crit_multiplier = constants.crit.multiplier;
    let resisted = is_fully_resisted(&defender, kind, &constants.damage);
    let raw = raw_damage(&attacker, kind, &constants.damage) * profile.damage_multiplier;
    let reduction = mitigation(&defender, kind, &constants.damage);

    let connects = profile.guaranteed_hit || encounter.rng_mut().gen_range(0.0..100.0) < to_hit;
    if !connects {
        debug!(
            actor = actor.name(),
            target = target.name(),
            round,
            hit_chance = to_hit,
            "attack dodged"
        );
        return Ok(ActionResult::dodged(round).between(actor.name(), target.name()));
    }

    if resisted {
        debug!(actor = actor.name(), target = target.name(), round, "attack resisted");
        return Ok(ActionResult::resisted(round).between(actor.name(), target.name()));
    }

    let crit = encounter.rng_mut().gen_range(0.0..100.0) < to_crit;
    let scaled = if crit { raw * crit_multiplier } else { raw };
    let damage = final_damage(scaled, reduction);
    target.take_damage(damage);

    debug!(
        actor = actor.name(),
        target = target.name(),
        round,
        damage,
        crit,
        target_hp = target.hp(),
        "attack resolved"
    );

    Ok(ActionResult::hit(damage, crit, round).between(actor.name(), target.name()))
}
