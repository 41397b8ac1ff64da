//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hit points granted per point of CON
pub const HP_PER_CON: i32 = 10;

/// Tunable combat constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub hit: HitConstants,
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub damage: DamageConstants,
}

impl GameConstants {
    /// Load constants from a TOML file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string and validate them
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check that every curve is well-formed and every value is finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_curve("hit", self.hit.base, self.hit.ceiling, self.hit.steepness)?;
        validate_curve("crit", self.crit.base, self.crit.ceiling, self.crit.steepness)?;

        require_finite("crit.multiplier", self.crit.multiplier)?;
        if self.crit.multiplier < 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "crit.multiplier must be at least 1.0, got {}",
                self.crit.multiplier
            )));
        }

        let d = &self.damage;
        for (name, value) in [
            ("damage.offense_scaling", d.offense_scaling),
            ("damage.armor_mitigation", d.armor_mitigation),
            ("damage.resist_mitigation", d.resist_mitigation),
        ] {
            require_finite(name, value)?;
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

fn validate_curve(name: &str, base: f64, ceiling: f64, steepness: f64) -> Result<(), ConfigError> {
    require_finite(&format!("{name}.base"), base)?;
    require_finite(&format!("{name}.ceiling"), ceiling)?;
    require_finite(&format!("{name}.steepness"), steepness)?;
    if !(0.0..=100.0).contains(&base) || !(0.0..=100.0).contains(&ceiling) {
        return Err(ConfigError::ValidationError(format!(
            "{name} chances must be percentages in [0, 100]"
        )));
    }
    if base > ceiling {
        return Err(ConfigError::ValidationError(format!(
            "{name}.base ({base}) exceeds {name}.ceiling ({ceiling})"
        )));
    }
    if steepness <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "{name}.steepness must be positive, got {steepness}"
        )));
    }
    Ok(())
}

/// Opposed accuracy-vs-evasion roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitConstants {
    /// Hit chance (percent) against overwhelming evasion
    #[serde(default = "default_hit_base")]
    pub base: f64,
    /// Hit chance (percent) against no evasion at all
    #[serde(default = "default_hit_ceiling")]
    pub ceiling: f64,
    /// Logistic slope per point of stat difference
    #[serde(default = "default_steepness")]
    pub steepness: f64,
}

impl Default for HitConstants {
    fn default() -> Self {
        HitConstants {
            base: 5.0,
            ceiling: 95.0,
            steepness: 0.15,
        }
    }
}

fn default_hit_base() -> f64 {
    5.0
}
fn default_hit_ceiling() -> f64 {
    95.0
}
fn default_steepness() -> f64 {
    0.15
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritConstants {
    #[serde(default = "default_crit_base")]
    pub base: f64,
    #[serde(default = "default_crit_ceiling")]
    pub ceiling: f64,
    #[serde(default = "default_steepness")]
    pub steepness: f64,
    /// Critical strike damage multiplier (1.5 = 150%)
    #[serde(default = "default_crit_multiplier")]
    pub multiplier: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            base: 5.0,
            ceiling: 50.0,
            steepness: 0.15,
            multiplier: 1.5,
        }
    }
}

fn default_crit_base() -> f64 {
    5.0
}
fn default_crit_ceiling() -> f64 {
    50.0
}
fn default_crit_multiplier() -> f64 {
    1.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Fraction of the offense stat (STR or INT) added to weapon damage
    #[serde(default = "default_offense_scaling")]
    pub offense_scaling: f64,
    /// Flat reduction per point of armor (physical)
    #[serde(default = "default_armor_mitigation")]
    pub armor_mitigation: f64,
    /// Flat reduction per point of resist (magical)
    #[serde(default = "default_resist_mitigation")]
    pub resist_mitigation: f64,
    /// Resist at or above this value negates magical hits entirely
    #[serde(default = "default_full_resist_threshold")]
    pub full_resist_threshold: i32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            offense_scaling: 0.5,
            armor_mitigation: 0.25,
            resist_mitigation: 0.30,
            full_resist_threshold: 100,
        }
    }
}

fn default_offense_scaling() -> f64 {
    0.5
}
fn default_armor_mitigation() -> f64 {
    0.25
}
fn default_resist_mitigation() -> f64 {
    0.30
}
fn default_full_resist_threshold() -> i32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert!((constants.hit.ceiling - 95.0).abs() < f64::EPSILON);
        assert!((constants.crit.multiplier - 1.5).abs() < f64::EPSILON);
        assert!((constants.damage.armor_mitigation - 0.25).abs() < f64::EPSILON);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[hit]
base = 0
ceiling = 100
steepness = 0.2

[crit]
multiplier = 2.0

[damage]
full_resist_threshold = 50
"#;

        let constants = GameConstants::parse(toml).unwrap();
        assert!((constants.hit.base - 0.0).abs() < f64::EPSILON);
        assert!((constants.crit.multiplier - 2.0).abs() < f64::EPSILON);
        // Unspecified fields keep their defaults
        assert!((constants.crit.ceiling - 50.0).abs() < f64::EPSILON);
        assert!((constants.damage.offense_scaling - 0.5).abs() < f64::EPSILON);
        assert_eq!(constants.damage.full_resist_threshold, 50);
    }

    #[test]
    fn test_empty_document_is_default() {
        let constants = GameConstants::parse("").unwrap();
        assert_eq!(constants, GameConstants::default());
    }

    #[test]
    fn test_validation_rejects_inverted_curve() {
        let err = GameConstants::parse("[hit]\nbase = 90\nceiling = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validation_rejects_weak_crit() {
        let err = GameConstants::parse("[crit]\nmultiplier = 0.5\n").unwrap_err();
        assert!(err.to_string().contains("crit.multiplier"));
    }

    #[test]
    fn test_validation_rejects_nan() {
        for (doc, field) in [
            ("[hit]\nbase = nan\n", "hit.base"),
            ("[hit]\nceiling = nan\n", "hit.ceiling"),
            ("[hit]\nsteepness = nan\n", "hit.steepness"),
            ("[crit]\nsteepness = inf\n", "crit.steepness"),
            ("[crit]\nmultiplier = nan\n", "crit.multiplier"),
            ("[crit]\nmultiplier = inf\n", "crit.multiplier"),
            ("[damage]\noffense_scaling = nan\n", "damage.offense_scaling"),
            ("[damage]\narmor_mitigation = nan\n", "damage.armor_mitigation"),
            ("[damage]\nresist_mitigation = inf\n", "damage.resist_mitigation"),
        ] {
            let err = GameConstants::parse(doc).unwrap_err();
            assert!(matches!(err, ConfigError::ValidationError(_)), "{doc}");
            assert!(err.to_string().contains(field), "{doc}: {err}");
        }
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameConstants::parse("[hit\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
