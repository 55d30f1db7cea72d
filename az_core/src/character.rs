//! Character record - the unit progression operates on

use crate::formulas::base_stats;
use crate::types::{PlayerClass, Rank, Stats};
use serde::{Deserialize, Serialize};

/// A playable character
///
/// The class is fixed at creation and never re-derived from the stat
/// block. Rank, level and xp only ever move forward; callers load and
/// persist this record around the progression calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub class: PlayerClass,
    pub rank: Rank,
    pub level: u32,
    pub xp: u64,
    pub stats: Stats,
    /// Ids of learned skills, resolved through the skill catalog
    #[serde(default)]
    pub skills: Vec<String>,
    /// Awarded but unallocated stat points
    #[serde(default)]
    pub stat_points: u32,
    /// Awarded but unspent skill points
    #[serde(default)]
    pub skill_points: u32,
}

impl Character {
    /// Create a fresh character at Rank A, level 1, zero XP
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: PlayerClass) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            class,
            rank: Rank::A,
            level: 1,
            xp: 0,
            stats: base_stats(Rank::A, 1),
            skills: Vec::new(),
            stat_points: 0,
            skill_points: 0,
        }
    }
}
