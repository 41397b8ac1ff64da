//! ActionResult - Outcome of one resolved action

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label the resolution engine gives an action before a skill stamps it
pub const BASIC_ATTACK_NAME: &str = "Basic Attack";

/// Why an action ended the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionReason {
    /// The attack connected and dealt damage
    Hit,
    /// The target evaded the attack
    Dodged,
    /// The attack connected but the target's resist negated it
    Resisted,
    /// A restorative action
    Healed,
}

impl ActionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionReason::Hit => "hit",
            ActionReason::Dodged => "dodged",
            ActionReason::Resisted => "resisted",
            ActionReason::Healed => "healed",
        }
    }
}

impl fmt::Display for ActionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one resolved action
///
/// Built once per action. The only change allowed afterwards is stamping
/// the name of the skill that produced it via [`ActionResult::with_skill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActionRecord")]
pub struct ActionResult {
    actor: String,
    target: String,
    skill_used: String,
    hit: bool,
    crit: bool,
    damage: u32,
    healing: u32,
    reason: ActionReason,
    round: u32,
}

/// Wire form of [`ActionResult`], checked before it becomes one
#[derive(Deserialize)]
struct ActionRecord {
    actor: String,
    target: String,
    skill_used: String,
    hit: bool,
    crit: bool,
    damage: u32,
    healing: u32,
    reason: ActionReason,
    round: u32,
}

impl TryFrom<ActionRecord> for ActionResult {
    type Error = String;

    fn try_from(record: ActionRecord) -> Result<Self, String> {
        let consistent = match record.reason {
            ActionReason::Hit => record.hit && record.damage >= 1,
            ActionReason::Dodged => !record.hit && record.damage == 0,
            ActionReason::Resisted => record.hit && record.damage == 0,
            ActionReason::Healed => record.damage == 0,
        };
        if !consistent {
            return Err(format!(
                "inconsistent action: reason {} with hit={} damage={}",
                record.reason, record.hit, record.damage
            ));
        }
        Ok(ActionResult {
            actor: record.actor,
            target: record.target,
            skill_used: record.skill_used,
            hit: record.hit,
            crit: record.crit,
            damage: record.damage,
            healing: record.healing,
            reason: record.reason,
            round: record.round,
        })
    }
}

impl ActionResult {
    /// Create a result
    ///
    /// The fields are brought in line with `reason`: a miss or a dodge never
    /// carries damage, a resisted or restorative action deals none, and a
    /// hit deals at least 1.
    pub fn new(hit: bool, damage: u32, reason: ActionReason, round: u32) -> Self {
        let hit = hit && reason != ActionReason::Dodged;
        let damage = match reason {
            ActionReason::Hit if hit => damage.max(1),
            _ => 0,
        };
        ActionResult {
            actor: String::new(),
            target: String::new(),
            skill_used: BASIC_ATTACK_NAME.to_string(),
            hit,
            crit: false,
            damage,
            healing: 0,
            reason,
            round,
        }
    }

    /// An attack that connected
    pub fn hit(damage: u32, crit: bool, round: u32) -> Self {
        let mut result = Self::new(true, damage, ActionReason::Hit, round);
        result.crit = crit;
        result
    }

    /// An attack the target evaded
    pub fn dodged(round: u32) -> Self {
        Self::new(false, 0, ActionReason::Dodged, round)
    }

    /// An attack that connected but was negated
    pub fn resisted(round: u32) -> Self {
        Self::new(true, 0, ActionReason::Resisted, round)
    }

    /// A heal for `amount` hit points
    pub fn healed(amount: u32, round: u32) -> Self {
        let mut result = Self::new(true, 0, ActionReason::Healed, round);
        result.healing = amount;
        result
    }

    /// Name the participants
    pub fn between(mut self, actor: impl Into<String>, target: impl Into<String>) -> Self {
        self.actor = actor.into();
        self.target = target.into();
        self
    }

    /// Stamp the skill that produced this result
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill_used = skill.into();
        self
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn skill_used(&self) -> &str {
        &self.skill_used
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_crit(&self) -> bool {
        self.crit
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn healing(&self) -> u32 {
        self.healing
    }

    pub fn reason(&self) -> ActionReason {
        self.reason
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Field map view of the result
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ActionReason::Hit => {
                write!(
                    f,
                    "{} used {} on {} for {} dmg",
                    self.actor, self.skill_used, self.target, self.damage
                )?;
                if self.crit {
                    f.write_str(" CRIT!")?;
                }
                Ok(())
            }
            ActionReason::Dodged => write!(
                f,
                "{}'s {} MISSED {} (dodged)",
                self.actor, self.skill_used, self.target
            ),
            ActionReason::Resisted => write!(
                f,
                "{}'s {} was resisted by {}",
                self.actor, self.skill_used, self.target
            ),
            ActionReason::Healed => write!(
                f,
                "{} used {} and recovered {} HP",
                self.actor, self.skill_used, self.healing
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_never_carries_damage() {
        let result = ActionResult::new(false, 40, ActionReason::Dodged, 3);
        assert_eq!(result.damage(), 0);
        assert!(!result.is_hit());
        assert_eq!(result.round(), 3);
    }

    #[test]
    fn test_new_keeps_fields_consistent() {
        let zero_hit = ActionResult::new(true, 0, ActionReason::Hit, 1);
        assert_eq!(zero_hit.damage(), 1);

        let resisted = ActionResult::new(true, 9, ActionReason::Resisted, 1);
        assert_eq!(resisted.damage(), 0);

        let dodged = ActionResult::new(true, 9, ActionReason::Dodged, 1);
        assert!(!dodged.is_hit());
        assert_eq!(dodged.damage(), 0);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_record() {
        let zero_hit = r#"{"actor":"A","target":"B","skill_used":"Basic Attack","hit":true,"crit":false,"damage":0,"healing":0,"reason":"hit","round":1}"#;
        let err = serde_json::from_str::<ActionResult>(zero_hit).unwrap_err();
        assert!(err.to_string().contains("inconsistent action"));

        let damaging_dodge = r#"{"actor":"A","target":"B","skill_used":"Basic Attack","hit":false,"crit":false,"damage":7,"healing":0,"reason":"dodged","round":1}"#;
        assert!(serde_json::from_str::<ActionResult>(damaging_dodge).is_err());
    }

    #[test]
    fn test_default_label_is_basic_attack() {
        let result = ActionResult::hit(12, false, 1);
        assert_eq!(result.skill_used(), BASIC_ATTACK_NAME);

        let stamped = result.with_skill("Power Strike");
        assert_eq!(stamped.skill_used(), "Power Strike");
        assert_eq!(stamped.damage(), 12);
    }

    #[test]
    fn test_dict_view() {
        let result = ActionResult::hit(21, true, 2).between("Warrior", "Wizard");
        let value = result.to_value();
        assert_eq!(value["hit"], true);
        assert_eq!(value["damage"], 21);
        assert_eq!(value["reason"], "hit");
        assert_eq!(value["round"], 2);
        assert_eq!(value["skill_used"], "Basic Attack");
    }

    #[test]
    fn test_json_roundtrip_keeps_reason() {
        let result = ActionResult::resisted(4).between("Wizard", "Golem");
        let json = result.to_json().unwrap();
        assert!(json.contains("\"reason\":\"resisted\""));
        let back: ActionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_display_lines() {
        let hit = ActionResult::hit(30, true, 1)
            .between("Warrior", "Wizard")
            .with_skill("Power Strike");
        assert_eq!(hit.to_string(), "Warrior used Power Strike on Wizard for 30 dmg CRIT!");

        let miss = ActionResult::dodged(1).between("Wizard", "Warrior");
        assert_eq!(miss.to_string(), "Wizard's Basic Attack MISSED Warrior (dodged)");
    }
}
