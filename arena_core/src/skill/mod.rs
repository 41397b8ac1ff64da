//! Skills - Actions a combatant can take and the scheduler that picks them
//!
//! Every skill shares one capability: `execute(actor, target, encounter,
//! round)`. Most delegate to [`resolve_attack`](crate::combat::resolve_attack)
//! with their own [`AttackProfile`](crate::combat::AttackProfile); others
//! (such as [`Mend`]) run bespoke logic.
//!
//! Cooldowns are not stored on the skill. They live in the owning
//! [`SkillBook`] so a skill definition can be shared between combatants.

mod basic;
mod book;
mod mend;
mod strike;

pub use basic::BasicAttack;
pub use book::{SkillBook, SkillEntry};
pub use mend::Mend;
pub use strike::Strike;

use crate::combat::ActionResult;
use crate::combatant::Combatant;
use crate::encounter::Encounter;
use crate::error::Result;
use std::fmt::Debug;

/// Something a combatant can do on their turn
pub trait Skill: Send + Sync + Debug {
    /// Display name, stamped onto every result the skill produces
    fn name(&self) -> &str;

    /// Turns the skill stays unavailable after use
    fn cooldown_max(&self) -> u32 {
        0
    }

    /// Selection priority (lower is chosen first)
    fn priority(&self) -> i32 {
        0
    }

    /// Perform the skill
    ///
    /// The returned result must carry `round` and this skill's name.
    fn execute(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        encounter: &mut Encounter,
        round: u32,
    ) -> Result<ActionResult>;
}
