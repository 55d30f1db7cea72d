//! Status effects - timed modifiers applied to a stat snapshot

use crate::types::Stats;
use serde::{Deserialize, Serialize};

/// Stat a buff or debuff moves
///
/// Explicit, not inferred: legacy content encoded the target in the effect
/// name ("ATQ"/"DEF" substrings); [`ModifierTarget::from_effect_name`]
/// exists to migrate such names into this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierTarget {
    Attack,
    Defense,
}

impl ModifierTarget {
    /// Recover the target from a legacy effect name
    ///
    /// Matches the original content convention: a name containing "ATQ"
    /// targets attack, one containing "DEF" targets defense.
    pub fn from_effect_name(name: &str) -> Option<ModifierTarget> {
        if name.contains("ATQ") {
            Some(ModifierTarget::Attack)
        } else if name.contains("DEF") {
            Some(ModifierTarget::Defense)
        } else {
            None
        }
    }
}

/// What kind of effect this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Flat HP loss per application
    Poison,
    /// Flat HP loss per application
    Burn,
    /// Halves speed
    Frozen,
    /// Informational only; turn handling is the caller's concern
    Stunned,
    /// Raises the target stat by the effect's value
    Buff(ModifierTarget),
    /// Lowers the target stat by the effect's value, never below 1
    Debuff(ModifierTarget),
}

/// A named, timed modifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub id: String,
    pub name: String,
    pub kind: EffectKind,
    /// Duration in turns
    pub duration: u32,
    /// Magnitude - damage for poison/burn, stat delta for buff/debuff
    pub value: i64,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default)]
    pub max_stacks: Option<u32>,
    #[serde(default)]
    pub dispellable: bool,
}

impl StatusEffect {
    /// Minimal constructor; stacking and dispel flags default off
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: EffectKind, duration: u32, value: i64) -> Self {
        StatusEffect {
            id: id.into(),
            name: name.into(),
            kind,
            duration,
            value,
            stackable: false,
            max_stacks: None,
            dispellable: false,
        }
    }
}

/// Apply one effect tick to a stat snapshot
///
/// Pure transform: returns the new stats plus a descriptive message. HP
/// never drops below 0; debuffed attack/defense never drop below 1.
pub fn apply_status_effect(stats: &Stats, effect: &StatusEffect) -> (Stats, String) {
    let mut next = *stats;
    let message = match effect.kind {
        EffectKind::Poison => {
            next.hp = (next.hp - effect.value).max(0);
            format!("{} poison damage", effect.value)
        }
        EffectKind::Burn => {
            next.hp = (next.hp - effect.value).max(0);
            format!("{} burn damage", effect.value)
        }
        EffectKind::Frozen => {
            next.speed /= 2;
            "speed halved by freezing".to_string()
        }
        EffectKind::Stunned => "target is stunned".to_string(),
        EffectKind::Buff(ModifierTarget::Attack) => {
            next.attack += effect.value;
            format!("+{} attack", effect.value)
        }
        EffectKind::Buff(ModifierTarget::Defense) => {
            next.defense += effect.value;
            format!("+{} defense", effect.value)
        }
        EffectKind::Debuff(ModifierTarget::Attack) => {
            next.attack = (next.attack - effect.value).max(1);
            format!("-{} attack", effect.value)
        }
        EffectKind::Debuff(ModifierTarget::Defense) => {
            next.defense = (next.defense - effect.value).max(1);
            format!("-{} defense", effect.value)
        }
    };
    (next, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Stats {
        Stats {
            hp: 100,
            attack: 20,
            defense: 15,
            speed: 31,
            ..Stats::default()
        }
    }

    #[test]
    fn test_poison_damages_and_clamps() {
        let poison = StatusEffect::new("e1", "Weak Poison", EffectKind::Poison, 3, 30);
        let (hit, message) = apply_status_effect(&target(), &poison);
        assert_eq!(hit.hp, 70);
        assert_eq!(message, "30 poison damage");

        let lethal = StatusEffect::new("e2", "Strong Poison", EffectKind::Poison, 3, 500);
        let (dead, _) = apply_status_effect(&target(), &lethal);
        assert_eq!(dead.hp, 0);
    }

    #[test]
    fn test_burn_damages_hp() {
        let burn = StatusEffect::new("e3", "Searing Burn", EffectKind::Burn, 2, 12);
        let (hit, message) = apply_status_effect(&target(), &burn);
        assert_eq!(hit.hp, 88);
        assert!(message.contains("burn"));
    }

    #[test]
    fn test_frozen_halves_speed() {
        let frozen = StatusEffect::new("e4", "Deep Freeze", EffectKind::Frozen, 2, 0);
        let (slowed, _) = apply_status_effect(&target(), &frozen);
        assert_eq!(slowed.speed, 15); // floor of 31/2
    }

    #[test]
    fn test_stunned_changes_nothing() {
        let stun = StatusEffect::new("e5", "Concussion", EffectKind::Stunned, 1, 0);
        let (same, message) = apply_status_effect(&target(), &stun);
        assert_eq!(same, target());
        assert_eq!(message, "target is stunned");
    }

    #[test]
    fn test_buff_raises_target_stat() {
        let buff = StatusEffect::new(
            "e6",
            "War Banner",
            EffectKind::Buff(ModifierTarget::Attack),
            5,
            8,
        );
        let (boosted, message) = apply_status_effect(&target(), &buff);
        assert_eq!(boosted.attack, 28);
        assert_eq!(message, "+8 attack");
    }

    #[test]
    fn test_debuff_floors_at_one() {
        let debuff = StatusEffect::new(
            "e7",
            "Sunder",
            EffectKind::Debuff(ModifierTarget::Defense),
            4,
            50,
        );
        let (sundered, _) = apply_status_effect(&target(), &debuff);
        assert_eq!(sundered.defense, 1);
    }

    #[test]
    fn test_legacy_name_dispatch() {
        assert_eq!(
            ModifierTarget::from_effect_name("Buff de ATQ"),
            Some(ModifierTarget::Attack)
        );
        assert_eq!(
            ModifierTarget::from_effect_name("DEF Break"),
            Some(ModifierTarget::Defense)
        );
        assert_eq!(ModifierTarget::from_effect_name("Haste"), None);
    }
}
