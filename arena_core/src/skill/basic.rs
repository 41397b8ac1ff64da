//! BasicAttack - Plain attack with no cooldown

use super::Skill;
use crate::combat::{basic_attack, ActionResult, BASIC_ATTACK_NAME};
use crate::combatant::Combatant;
use crate::encounter::Encounter;
use crate::error::Result;

/// The attack every combatant falls back to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicAttack;

impl Skill for BasicAttack {
    fn name(&self) -> &str {
        BASIC_ATTACK_NAME
    }

    fn execute(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        encounter: &mut Encounter,
        round: u32,
    ) -> Result<ActionResult> {
        basic_attack(actor, target, encounter, round)
    }
}
