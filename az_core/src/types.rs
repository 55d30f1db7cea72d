//! Core types for the A-Z rank system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum character level
pub const MAX_LEVEL: u32 = 125;

/// Fatigue is a 0-100 resource; skill use raises it, rest lowers it
pub const FATIGUE_CAP: i64 = 100;

/// Power tier, `A` (weakest) through `Z` (strongest)
///
/// Ranks are totally ordered and advancement is always to the adjacent
/// next rank, never skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
}

impl Rank {
    /// All ranks in ascending power order
    pub const ALL: [Rank; 26] = [
        Rank::A, Rank::B, Rank::C, Rank::D, Rank::E, Rank::F, Rank::G,
        Rank::H, Rank::I, Rank::J, Rank::K, Rank::L, Rank::M, Rank::N,
        Rank::O, Rank::P, Rank::Q, Rank::R, Rank::S, Rank::T, Rank::U,
        Rank::V, Rank::W, Rank::X, Rank::Y, Rank::Z,
    ];

    /// Zero-based position in the rank order (A = 0, Z = 25)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The adjacent next rank, or `None` at rank Z
    pub fn next(self) -> Option<Rank> {
        Rank::ALL.get(self.index() + 1).copied()
    }

    /// Whether this is the final rank
    pub fn is_max(self) -> bool {
        self == Rank::Z
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Character class, chosen at creation and never re-derived from stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerClass {
    Warrior,
    Archer,
    Mage,
    Cleric,
    Assassin,
}

impl PlayerClass {
    /// Get all classes
    pub fn all() -> &'static [PlayerClass] {
        &[
            PlayerClass::Warrior,
            PlayerClass::Archer,
            PlayerClass::Mage,
            PlayerClass::Cleric,
            PlayerClass::Assassin,
        ]
    }
}

/// Damage school carried by an attack
///
/// `Physical` is the neutral school: it never passes through the elemental
/// matchup table. The six elemental schools use an asymmetric 6x6 factor
/// table where every school resists itself at 0.5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageSchool {
    #[default]
    Physical,
    Earth,
    Fire,
    Water,
    Air,
    Light,
    Shadow,
}

/// Matchup factors, row = attacking school, column = defending school.
/// Asymmetric on purpose (Fire vs Water is 1.5, Water vs Fire is 0.5).
const ELEMENTAL_MATCHUP: [[f64; 6]; 6] = [
    // vs:  Earth Fire  Water Air   Light Shadow
    /* Earth  */ [0.5, 1.2, 0.8, 1.0, 1.0, 1.0],
    /* Fire   */ [0.8, 0.5, 1.5, 1.0, 1.1, 0.9],
    /* Water  */ [1.2, 0.5, 0.5, 1.1, 0.9, 1.1],
    /* Air    */ [1.0, 1.0, 0.9, 0.5, 1.2, 0.8],
    /* Light  */ [1.0, 0.9, 1.1, 0.8, 0.5, 1.5],
    /* Shadow */ [1.0, 1.1, 0.9, 1.2, 0.5, 0.5],
];

impl DamageSchool {
    /// The six elemental schools, excluding `Physical`
    pub const ELEMENTS: [DamageSchool; 6] = [
        DamageSchool::Earth,
        DamageSchool::Fire,
        DamageSchool::Water,
        DamageSchool::Air,
        DamageSchool::Light,
        DamageSchool::Shadow,
    ];

    /// Whether this school participates in elemental matchups
    pub fn is_elemental(self) -> bool {
        self != DamageSchool::Physical
    }

    fn element_index(self) -> Option<usize> {
        match self {
            DamageSchool::Physical => None,
            DamageSchool::Earth => Some(0),
            DamageSchool::Fire => Some(1),
            DamageSchool::Water => Some(2),
            DamageSchool::Air => Some(3),
            DamageSchool::Light => Some(4),
            DamageSchool::Shadow => Some(5),
        }
    }

    /// Damage factor for this school attacking into `defending`
    ///
    /// Physical damage on either side is unscaled (factor 1.0).
    pub fn matchup(self, defending: DamageSchool) -> f64 {
        match (self.element_index(), defending.element_index()) {
            (Some(att), Some(def)) => ELEMENTAL_MATCHUP[att][def],
            _ => 1.0,
        }
    }
}

impl fmt::Display for DamageSchool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A combatant's full stat snapshot
///
/// A flat value struct: secondary stats default to zero so formulas can
/// treat "absent" uniformly without option-chasing. `impact_points` is a
/// derived score (see [`crate::formulas::impact_points`]), never authored
/// directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    // Primary attributes
    pub hp: i64,
    pub energy: i64,
    pub attack: i64,
    pub defense: i64,
    pub magic: i64,
    pub resistance: i64,
    pub agility: i64,
    pub speed: i64,
    /// 0-100, rises with skill use
    pub fatigue: i64,
    /// Derived power score
    pub impact_points: i64,

    // Secondary attributes (zero when not in play)
    #[serde(default)]
    pub crit_chance: i64,
    #[serde(default)]
    pub crit_damage: i64,
    #[serde(default)]
    pub dodge_chance: i64,
    #[serde(default)]
    pub range: i64,
    #[serde(default)]
    pub spell_damage: i64,
    #[serde(default)]
    pub cc_duration: i64,
    #[serde(default)]
    pub healing_power: i64,
    #[serde(default)]
    pub stealth: i64,
    #[serde(default)]
    pub attack_speed: i64,
}

impl Stats {
    /// Whether this combatant still stands
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// A combat action
///
/// Read-only reference data: the engine never mutates skill definitions.
/// `damage`/`healing` of 0 mean the skill carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub class: Option<PlayerClass>,
    #[serde(default = "default_required_level")]
    pub required_level: u32,
    #[serde(default)]
    pub school: DamageSchool,
    #[serde(default)]
    pub damage: i64,
    #[serde(default)]
    pub healing: i64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub cooldown: f64,
    #[serde(default)]
    pub range: i64,
    #[serde(default)]
    pub energy_cost: i64,
    #[serde(default)]
    pub fatigue_cost: i64,
    #[serde(default)]
    pub cast_time: f64,
    #[serde(default)]
    pub area_of_effect: bool,
}

fn default_required_level() -> u32 {
    1
}

/// Catalog id of the universal fallback attack
pub const BASIC_ATTACK_ID: &str = "basic_attack";

impl Skill {
    /// The zero-cost physical fallback used when no listed skill is usable
    pub fn basic_attack() -> Self {
        Skill {
            id: BASIC_ATTACK_ID.to_string(),
            name: "Basic Attack".to_string(),
            description: "A plain weapon strike".to_string(),
            class: None,
            required_level: 1,
            school: DamageSchool::Physical,
            damage: 0,
            healing: 0,
            duration: 0.0,
            cooldown: 0.0,
            range: 1,
            energy_cost: 0,
            fatigue_cost: 0,
            cast_time: 0.0,
            area_of_effect: false,
        }
    }

    /// Whether the skill carries an explicit damage magnitude
    pub fn has_damage(&self) -> bool {
        self.damage > 0
    }
}
