//! SkillBook - Registered skills and their cooldowns

use super::Skill;
use std::sync::Arc;
use tracing::trace;

/// A registered skill and its remaining cooldown
#[derive(Debug, Clone)]
pub struct SkillEntry {
    skill: Arc<dyn Skill>,
    cooldown_remaining: u32,
}

impl SkillEntry {
    pub fn skill(&self) -> &Arc<dyn Skill> {
        &self.skill
    }

    pub fn name(&self) -> &str {
        self.skill.name()
    }

    /// Turns until the skill can be used again
    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }
}

/// Ordered set of skills owned by one combatant
///
/// Only the scheduler ([`SkillBook::commit`]) changes cooldowns.
#[derive(Debug, Clone, Default)]
pub struct SkillBook {
    entries: Vec<SkillEntry>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill, ready for use
    pub fn add(&mut self, skill: Arc<dyn Skill>) {
        trace!(skill = skill.name(), cooldown = skill.cooldown_max(), "skill registered");
        self.entries.push(SkillEntry {
            skill,
            cooldown_remaining: 0,
        });
    }

    /// Index of the skill to use this turn
    ///
    /// Lowest priority among ready skills; ties go to the earliest
    /// registered. `None` means fall back to the basic attack.
    pub fn select(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_ready())
            .min_by_key(|(index, entry)| (entry.skill.priority(), *index))
            .map(|(index, _)| index)
    }

    /// Advance cooldowns at the end of a turn
    ///
    /// The used skill goes on full cooldown; every other skill ticks down
    /// by one. Called exactly once per turn of the owner.
    pub fn commit(&mut self, used: Option<usize>) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if Some(index) == used {
                entry.cooldown_remaining = entry.skill.cooldown_max();
            } else {
                entry.cooldown_remaining = entry.cooldown_remaining.saturating_sub(1);
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&SkillEntry> {
        self.entries.get(index)
    }

    /// Remaining cooldown of the first skill with this name
    pub fn cooldown(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .map(|entry| entry.cooldown_remaining)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Make every skill ready again
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.cooldown_remaining = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::Strike;

    fn named(name: &str, cooldown: u32, priority: i32) -> Arc<dyn Skill> {
        Arc::new(Strike::new(name).with_cooldown(cooldown).with_priority(priority))
    }

    #[test]
    fn test_empty_book_selects_nothing() {
        let book = SkillBook::new();
        assert_eq!(book.select(), None);
    }

    #[test]
    fn test_lowest_priority_wins() {
        let mut book = SkillBook::new();
        book.add(named("Jab", 0, 5));
        book.add(named("Cleave", 0, 1));
        book.add(named("Kick", 0, 3));
        assert_eq!(book.select(), Some(1));
    }

    #[test]
    fn test_ties_go_to_registration_order() {
        let mut book = SkillBook::new();
        book.add(named("First", 0, 2));
        book.add(named("Second", 0, 2));
        assert_eq!(book.select(), Some(0));
    }

    #[test]
    fn test_cooldown_window() {
        let mut book = SkillBook::new();
        book.add(named("Power Strike", 2, 0));

        // Round N: used
        assert_eq!(book.select(), Some(0));
        book.commit(Some(0));
        assert_eq!(book.cooldown("Power Strike"), Some(2));

        // Round N+1 and N+2: basic attack
        assert_eq!(book.select(), None);
        book.commit(None);
        assert_eq!(book.select(), None);
        book.commit(None);

        // Round N+3: ready again
        assert_eq!(book.select(), Some(0));
    }

    #[test]
    fn test_cooling_skill_yields_to_next() {
        let mut book = SkillBook::new();
        book.add(named("Big", 3, 0));
        book.add(named("Small", 0, 1));

        book.commit(Some(0));
        assert_eq!(book.select(), Some(1));
        book.commit(Some(1));
        assert_eq!(book.cooldown("Big"), Some(1));
        assert_eq!(book.cooldown("Small"), Some(0));
    }

    #[test]
    fn test_reset_clears_cooldowns() {
        let mut book = SkillBook::new();
        book.add(named("Big", 3, 0));
        book.commit(Some(0));
        book.reset();
        assert!(book.iter().all(SkillEntry::is_ready));
        assert_eq!(book.cooldown("Missing"), None);
    }
}
