//! Combat resolution - Resolve attacks between combatants

mod resolution;
mod result;

pub use resolution::{basic_attack, resolve_attack, AttackProfile};
pub(crate) use resolution::deserialize_multiplier;
pub use result::{ActionReason, ActionResult, BASIC_ATTACK_NAME};
