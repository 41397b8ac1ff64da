//! BattleLog - Action results grouped by round

use crate::combat::ActionResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every action resolved in one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    pub round: u32,
    pub actions: Vec<ActionResult>,
}

/// Chronological record of an encounter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    rounds: Vec<RoundLog>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result to the group for its round
    pub fn push(&mut self, result: ActionResult) {
        match self.rounds.last_mut() {
            Some(last) if last.round == result.round() => last.actions.push(result),
            _ => self.rounds.push(RoundLog {
                round: result.round(),
                actions: vec![result],
            }),
        }
    }

    pub fn rounds(&self) -> &[RoundLog] {
        &self.rounds
    }

    /// All actions in order
    pub fn iter(&self) -> impl Iterator<Item = &ActionResult> {
        self.rounds.iter().flat_map(|r| r.actions.iter())
    }

    /// Total number of recorded actions
    pub fn len(&self) -> usize {
        self.rounds.iter().map(|r| r.actions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BattleLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for round in &self.rounds {
            writeln!(f, "===== Round {} =====", round.round)?;
            for action in &round.actions {
                writeln!(f, "{action}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_round() {
        let mut log = BattleLog::new();
        log.push(ActionResult::hit(10, false, 1).between("A", "B"));
        log.push(ActionResult::dodged(1).between("B", "A"));
        log.push(ActionResult::hit(12, false, 2).between("A", "B"));

        assert_eq!(log.rounds().len(), 2);
        assert_eq!(log.rounds()[0].actions.len(), 2);
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().map(|a| a.damage()).sum::<u32>(), 22);
    }

    #[test]
    fn test_narrative() {
        let mut log = BattleLog::new();
        log.push(ActionResult::hit(10, false, 1).between("A", "B"));
        log.push(ActionResult::dodged(1).between("B", "A"));

        let text = log.to_string();
        assert_eq!(
            text,
            "===== Round 1 =====\nA used Basic Attack on B for 10 dmg\nB's Basic Attack MISSED A (dodged)\n"
        );
    }

    #[test]
    fn test_serializes_rounds() {
        let mut log = BattleLog::new();
        log.push(ActionResult::healed(8, 3).between("C", "C").with_skill("Mend"));
        let value: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(value["rounds"][0]["round"], 3);
        assert_eq!(value["rounds"][0]["actions"][0]["reason"], "healed");
    }
}
