//! Strike - Configurable attack skill

use super::Skill;
use crate::combat::{
    deserialize_multiplier, resolve_attack, ActionReason, ActionResult, AttackProfile,
};
use crate::combatant::Combatant;
use crate::effect::{EffectKind, StatusEffect};
use crate::encounter::Encounter;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An attack with its own cooldown, damage multiplier and effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strike {
    pub name: String,
    #[serde(default)]
    pub cooldown_max: u32,
    #[serde(default)]
    pub priority: i32,
    #[serde(default = "default_multiplier", deserialize_with = "deserialize_multiplier")]
    pub damage_multiplier: f64,
    #[serde(default)]
    pub guaranteed_hit: bool,
    /// Effect granted to the user after the attack
    #[serde(default)]
    pub self_effect: Option<EffectKind>,
    /// Effect inflicted on the target when the attack lands
    #[serde(default)]
    pub on_hit_effect: Option<EffectKind>,
}

fn default_multiplier() -> f64 {
    1.0
}

impl Strike {
    /// A plain strike: no cooldown, normal damage
    pub fn new(name: impl Into<String>) -> Self {
        Strike {
            name: name.into(),
            cooldown_max: 0,
            priority: 0,
            damage_multiplier: default_multiplier(),
            guaranteed_hit: false,
            self_effect: None,
            on_hit_effect: None,
        }
    }

    /// Double damage, never misses, grants Rage. Cooldown 2.
    pub fn power_strike() -> Self {
        Strike::new("Power Strike")
            .with_cooldown(2)
            .with_multiplier(2.0)
            .guaranteed()
            .with_self_effect(EffectKind::Rage)
    }

    /// Normal damage that poisons on hit. Cooldown 3.
    pub fn envenom() -> Self {
        Strike::new("Envenom")
            .with_cooldown(3)
            .with_priority(1)
            .with_on_hit_effect(EffectKind::Poison)
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown_max = cooldown;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.damage_multiplier = multiplier;
        self
    }

    pub fn guaranteed(mut self) -> Self {
        self.guaranteed_hit = true;
        self
    }

    pub fn with_self_effect(mut self, kind: EffectKind) -> Self {
        self.self_effect = Some(kind);
        self
    }

    pub fn with_on_hit_effect(mut self, kind: EffectKind) -> Self {
        self.on_hit_effect = Some(kind);
        self
    }

    fn profile(&self) -> AttackProfile {
        AttackProfile::new(self.damage_multiplier, self.guaranteed_hit)
    }
}

impl Skill for Strike {
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
        let result = resolve_attack(actor, target, encounter, round, &self.profile())?
            .with_skill(self.name.as_str());

        if let Some(kind) = self.on_hit_effect {
            if result.reason() == ActionReason::Hit && target.is_alive() {
                let caster = actor.combat_stats();
                target.apply_effect(StatusEffect::from_kind(kind, actor.name(), &caster));
            }
        }

        if let Some(kind) = self.self_effect {
            let caster = actor.combat_stats();
            let effect = StatusEffect::from_kind(kind, actor.name(), &caster);
            actor.apply_effect(effect);
        }

        Ok(result)
    }
}
