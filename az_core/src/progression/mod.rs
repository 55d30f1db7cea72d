//! Progression - the rank/level state machine
//!
//! A character's `(rank, level, xp)` only ever moves forward. Level-ups are
//! gated by a precomputed geometric XP table, rank-ups by the requirement
//! thresholds in [`requirements`]. Guard-violating calls fail loudly with
//! [`ProgressionError`]; they never silently no-op.

mod requirements;

pub use requirements::{meets_requirement, requirement_for, RankRequirement};

use crate::character::Character;
use crate::formulas::{base_stats, impact_points};
use crate::types::{Stats, MAX_LEVEL};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Progression guard violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("character is not eligible to level up")]
    NotEligibleForLevelUp,
    #[error("character is not eligible to rank up")]
    NotEligibleForRankUp,
    #[error("stat allocation of {allocated} points exceeds the {budget} awarded")]
    AllocationExceedsBudget { allocated: u32, budget: u32 },
}

static LEVEL_XP: OnceLock<Vec<u64>> = OnceLock::new();

/// Cumulative XP needed to reach each level, indexed by `level - 1`
///
/// `xp(1) = 0`, then `xp(n) = xp(n-1) + floor(100 * 1.15^(n-2))` - computed
/// once for levels 1..=125 and reused on every query.
pub fn level_xp_table() -> &'static [u64] {
    LEVEL_XP.get_or_init(|| {
        let mut table = Vec::with_capacity(MAX_LEVEL as usize);
        table.push(0u64);
        for level in 2..=MAX_LEVEL {
            let step = (100.0 * 1.15f64.powi(level as i32 - 2)).floor() as u64;
            table.push(table[level as usize - 2] + step);
        }
        table
    })
}

/// Cumulative XP needed to reach `level` (1..=125)
pub fn xp_to_reach_level(level: u32) -> u64 {
    let table = level_xp_table();
    table[(level.clamp(1, MAX_LEVEL) as usize) - 1]
}

/// What a single level-up awards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpReward {
    pub stat_points: u32,
    pub skill_points: u32,
    pub hp_bonus: i64,
    pub energy_bonus: i64,
}

/// Rewards granted on reaching `level`
///
/// An extra stat point every 5th level, an extra skill point every 10th;
/// HP bonus `floor(10 * (1 + level*0.1))`, Energy bonus
/// `floor(5 * (1 + level*0.08))`.
pub fn level_up_reward(level: u32) -> LevelUpReward {
    LevelUpReward {
        stat_points: if level % 5 == 0 { 3 } else { 2 },
        skill_points: if level % 10 == 0 { 2 } else { 1 },
        hp_bonus: 10 + level as i64,
        energy_bonus: 5 + 2 * level as i64 / 5,
    }
}

/// Caller-chosen distribution of awarded stat points
///
/// Each field is a point count added verbatim to the matching attribute.
/// The total may not exceed the level-up's awarded budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAllocation {
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub energy: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub magic: u32,
    #[serde(default)]
    pub resistance: u32,
    #[serde(default)]
    pub agility: u32,
    #[serde(default)]
    pub speed: u32,
}

impl StatAllocation {
    /// Total points this allocation spends
    pub fn total(&self) -> u32 {
        self.hp
            + self.energy
            + self.attack
            + self.defense
            + self.magic
            + self.resistance
            + self.agility
            + self.speed
    }

    fn apply(&self, stats: &mut Stats) {
        stats.hp += self.hp as i64;
        stats.energy += self.energy as i64;
        stats.attack += self.attack as i64;
        stats.defense += self.defense as i64;
        stats.magic += self.magic as i64;
        stats.resistance += self.resistance as i64;
        stats.agility += self.agility as i64;
        stats.speed += self.speed as i64;
    }
}

/// Result of an [`add_experience`] call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionOutcome {
    pub character: Character,
    pub leveled_up: bool,
    pub ranked_up: bool,
}

/// Progress toward the next level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// XP earned within the current level
    pub current: u64,
    /// XP span of the current level
    pub required: u64,
    /// 0-100
    pub percentage: f64,
}

/// Progress toward the next rank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    pub current_xp: u64,
    pub required_xp: u64,
    pub current_pi: i64,
    pub required_pi: i64,
    pub can_rank_up: bool,
}

/// Whether the character has banked enough XP for the next level
pub fn can_level_up(character: &Character) -> bool {
    character.level < MAX_LEVEL && character.xp >= xp_to_reach_level(character.level + 1)
}

/// Advance the character one level, applying rewards
///
/// Fails with [`ProgressionError::NotEligibleForLevelUp`] when the XP gate
/// is not met. HP and Energy bonuses always apply; the optional allocation
/// spends awarded stat points and may not exceed the budget. Leftover stat
/// points and all skill points bank on the character, and Impact Points are
/// recomputed so the score stays a derived value.
pub fn level_up(
    character: &Character,
    allocation: Option<&StatAllocation>,
) -> Result<Character, ProgressionError> {
    if !can_level_up(character) {
        return Err(ProgressionError::NotEligibleForLevelUp);
    }

    let new_level = character.level + 1;
    let reward = level_up_reward(new_level);

    let mut next = character.clone();
    next.level = new_level;
    next.stats.hp += reward.hp_bonus;
    next.stats.energy += reward.energy_bonus;

    let mut unspent = reward.stat_points;
    if let Some(allocation) = allocation {
        let allocated = allocation.total();
        if allocated > reward.stat_points {
            return Err(ProgressionError::AllocationExceedsBudget {
                allocated,
                budget: reward.stat_points,
            });
        }
        allocation.apply(&mut next.stats);
        unspent -= allocated;
    }

    next.stat_points += unspent;
    next.skill_points += reward.skill_points;
    next.stats.impact_points = impact_points(&next.stats);

    Ok(next)
}

/// Whether every threshold for the adjacent next rank is met
pub fn can_rank_up(character: &Character, completed_quests: &[String]) -> bool {
    match character.rank.next() {
        Some(next) => meets_requirement(character, &requirement_for(next), completed_quests),
        None => false,
    }
}

/// Advance the character to the adjacent next rank
///
/// Fails with [`ProgressionError::NotEligibleForRankUp`] when any threshold
/// is unmet. On success the stat block is re-baselined from
/// `(new_rank, level)`; Impact Points keep whichever is higher of the fresh
/// baseline and the previous score - a rank transition never regresses PI.
pub fn rank_up(
    character: &Character,
    completed_quests: &[String],
) -> Result<Character, ProgressionError> {
    if !can_rank_up(character, completed_quests) {
        return Err(ProgressionError::NotEligibleForRankUp);
    }
    let Some(new_rank) = character.rank.next() else {
        return Err(ProgressionError::NotEligibleForRankUp);
    };

    let baseline = base_stats(new_rank, character.level);
    let mut next = character.clone();
    next.rank = new_rank;
    next.stats = Stats {
        impact_points: baseline.impact_points.max(character.stats.impact_points),
        ..baseline
    };
    Ok(next)
}

/// Grant XP, then resolve every eligible level-up and at most one rank-up
///
/// Ordering is significant: all level-ups resolve before the single
/// rank-up check, so one large grant can jump several levels at once.
pub fn add_experience(character: &Character, amount: u64) -> ProgressionOutcome {
    let mut current = character.clone();
    current.xp = current.xp.saturating_add(amount);

    let mut leveled_up = false;
    while can_level_up(&current) {
        match level_up(&current, None) {
            Ok(next) => {
                current = next;
                leveled_up = true;
            }
            Err(_) => break,
        }
    }

    let mut ranked_up = false;
    if can_rank_up(&current, &[]) {
        if let Ok(next) = rank_up(&current, &[]) {
            current = next;
            ranked_up = true;
        }
    }

    ProgressionOutcome {
        character: current,
        leveled_up,
        ranked_up,
    }
}

/// Read-only projection of progress toward the next level
///
/// At the level cap the span is zero and the bar reads full.
pub fn get_level_progress(character: &Character) -> LevelProgress {
    if character.level >= MAX_LEVEL {
        return LevelProgress {
            current: 0,
            required: 0,
            percentage: 100.0,
        };
    }

    let level_floor = xp_to_reach_level(character.level);
    let next_level = xp_to_reach_level(character.level + 1);
    let current = character.xp.saturating_sub(level_floor);
    let required = next_level - level_floor;
    let percentage = (current as f64 / required as f64 * 100.0).clamp(0.0, 100.0);

    LevelProgress {
        current,
        required,
        percentage,
    }
}

/// Read-only projection of progress toward the next rank
pub fn get_rank_progress(character: &Character) -> RankProgress {
    match character.rank.next() {
        None => RankProgress {
            current_xp: character.xp,
            required_xp: character.xp,
            current_pi: character.stats.impact_points,
            required_pi: character.stats.impact_points,
            can_rank_up: false,
        },
        Some(next) => {
            let requirement = requirement_for(next);
            RankProgress {
                current_xp: character.xp,
                required_xp: requirement.min_xp,
                current_pi: character.stats.impact_points,
                required_pi: requirement.min_pi,
                can_rank_up: can_rank_up(character, &[]),
            }
        }
    }
}
