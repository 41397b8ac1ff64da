//! Mend - Self heal scaled by WIS

use super::Skill;
use crate::combat::ActionResult;
use crate::combatant::Combatant;
use crate::encounter::Encounter;
use crate::error::{CombatError, Result};
use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Restores the user's HP: `base + WIS × wis_scaling + INT × int_scaling`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mend {
    pub name: String,
    pub cooldown_max: u32,
    pub priority: i32,
    pub base: u32,
    pub wis_scaling: f64,
    pub int_scaling: f64,
}

impl Default for Mend {
    fn default() -> Self {
        Mend {
            name: "Mend".to_string(),
            cooldown_max: 3,
            priority: 2,
            base: 10,
            wis_scaling: 1.0,
            int_scaling: 0.25,
        }
    }
}

impl Mend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heal amount for the given caster
    pub fn amount(&self, caster: &Combatant) -> u32 {
        let stats = caster.combat_stats();
        let scaled = stats.get(Attribute::Wis).max(0) as f64 * self.wis_scaling
            + stats.get(Attribute::Int).max(0) as f64 * self.int_scaling;
        self.base.saturating_add(scaled.floor() as u32)
    }
}

impl Skill for Mend {
    fn name(&self) -> &str {
        &self.name
    }

    fn cooldown_max(&self) -> u32 {
        self.cooldown_max
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn execute(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        encounter: &mut Encounter,
        round: u32,
    ) -> Result<ActionResult> {
        if !actor.is_alive() {
            return Err(CombatError::ActorDefeated {
                actor: actor.name().to_string(),
            });
        }
        encounter.begin_action(round)?;

        let restored = actor.heal(self.amount(actor));
        debug!(actor = actor.name(), restored, hp = actor.hp(), round, "mend");

        Ok(ActionResult::healed(restored, round)
            .between(actor.name(), target.name())
            .with_skill(self.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ActionReason;
    use crate::stat_block::StatBag;
    use crate::types::DamageKind;

    fn cleric() -> Combatant {
        Combatant::new(
            "Cleric",
            DamageKind::Magical,
            StatBag::new()
                .with(Attribute::Con, 10)
                .with(Attribute::Wis, 12)
                .with(Attribute::Int, 8),
        )
    }

    #[test]
    fn test_mend_heals_actor() {
        let mut actor = cleric();
        let mut target = cleric();
        let mut encounter = Encounter::new(1);
        actor.take_damage(50);

        let result = Mend::new()
            .execute(&mut actor, &mut target, &mut encounter, 2)
            .unwrap();
        // 10 + 12 + 8 × 0.25
        assert_eq!(result.healing(), 24);
        assert_eq!(result.reason(), ActionReason::Healed);
        assert_eq!(result.skill_used(), "Mend");
        assert_eq!(result.round(), 2);
        assert_eq!(actor.hp(), 100 - 50 + 24);
    }

    #[test]
    fn test_mend_caps_at_max_hp() {
        let mut actor = cleric();
        let mut target = cleric();
        let mut encounter = Encounter::new(1);
        actor.take_damage(5);

        let result = Mend::new()
            .execute(&mut actor, &mut target, &mut encounter, 1)
            .unwrap();
        assert_eq!(result.healing(), 5);
        assert_eq!(actor.hp(), actor.max_hp());
    }

    #[test]
    fn test_mend_amount_saturates() {
        let mend = Mend {
            base: u32::MAX - 5,
            wis_scaling: 1.0e12,
            ..Mend::default()
        };
        assert_eq!(mend.amount(&cleric()), u32::MAX);
    }

    #[test]
    fn test_mend_respects_round_order() {
        let mut actor = cleric();
        let mut target = cleric();
        let mut encounter = Encounter::new(1);
        encounter.begin_action(3).unwrap();

        let err = Mend::new()
            .execute(&mut actor, &mut target, &mut encounter, 2)
            .unwrap_err();
        assert_eq!(err, CombatError::RoundOrder { round: 2, last: 3 });
    }
}
