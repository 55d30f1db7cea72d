//! Stat formulas - pure numeric mappings from rank and level
//!
//! Every derived attribute comes from one of three independent per-rank
//! multiplier tables (HP, Energy and Attack each have their own table,
//! base value and level growth rate) or from one of the fixed rank lookup
//! tables (Impact Point baselines, XP thresholds). All results are floored
//! to integers.

use crate::types::{Rank, Stats};

/// Per-rank HP multiplier, 1.0 at rank A rising to 3.5 at rank Z
const HP_RANK_MULTIPLIER: [f64; 26] = [
    1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1, 2.2,
    2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9, 3.0, 3.1, 3.2, 3.3, 3.4, 3.5,
];

/// Per-rank Energy multiplier, 1.0 at rank A rising to 3.0 at rank Z
const ENERGY_RANK_MULTIPLIER: [f64; 26] = [
    1.0, 1.08, 1.16, 1.24, 1.32, 1.40, 1.48, 1.56, 1.64, 1.72, 1.80,
    1.88, 1.96, 2.04, 2.12, 2.20, 2.28, 2.36, 2.44, 2.52, 2.60, 2.68,
    2.76, 2.84, 2.92, 3.00,
];

/// Per-rank Attack multiplier, 1.0 at rank A rising to 4.0 at rank Z
const ATTACK_RANK_MULTIPLIER: [f64; 26] = [
    1.0, 1.12, 1.24, 1.36, 1.48, 1.60, 1.72, 1.84, 1.96, 2.08, 2.20,
    2.32, 2.44, 2.56, 2.68, 2.80, 2.92, 3.04, 3.16, 3.28, 3.40, 3.52,
    3.64, 3.76, 3.88, 4.00,
];

/// Impact Point baseline per rank, before the per-level bonus
const PI_RANK_BASE: [i64; 26] = [
    10, 15, 22, 30, 40, 52, 65, 80, 97, 115, 135, 156, 179, 203, 229,
    256, 285, 315, 347, 380, 415, 451, 489, 528, 569, 611,
];

/// Minimum cumulative XP to become eligible for each rank
const XP_RANK_THRESHOLD: [u64; 26] = [
    0, 100, 250, 500, 900, 1_500, 2_300, 3_400, 4_800, 6_600, 8_800,
    11_500, 14_800, 18_800, 23_600, 29_300, 36_000, 43_800, 52_800,
    63_100, 74_800, 88_000, 102_800, 119_300, 137_800, 158_500,
];

fn scaled(base: f64, multiplier: f64, level: u32, growth: f64) -> i64 {
    let level_factor = 1.0 + (level.saturating_sub(1)) as f64 * growth;
    (base * multiplier * level_factor).floor() as i64
}

/// Baseline HP for a rank and level: `floor(100 * rank_mult * (1 + (level-1)*0.10))`
pub fn hp_for(rank: Rank, level: u32) -> i64 {
    scaled(100.0, HP_RANK_MULTIPLIER[rank.index()], level, 0.10)
}

/// Baseline Energy for a rank and level: `floor(50 * rank_mult * (1 + (level-1)*0.08))`
pub fn energy_for(rank: Rank, level: u32) -> i64 {
    scaled(50.0, ENERGY_RANK_MULTIPLIER[rank.index()], level, 0.08)
}

/// Baseline Attack for a rank and level: `floor(10 * rank_mult * (1 + (level-1)*0.12))`
pub fn attack_for(rank: Rank, level: u32) -> i64 {
    scaled(10.0, ATTACK_RANK_MULTIPLIER[rank.index()], level, 0.12)
}

/// Impact Point baseline from the rank table plus 5 per level past the first
pub fn impact_points_for(rank: Rank, level: u32) -> i64 {
    PI_RANK_BASE[rank.index()] + (level.saturating_sub(1)) as i64 * 5
}

/// Minimum cumulative XP to become eligible for `rank`
pub fn xp_threshold_for(rank: Rank) -> u64 {
    XP_RANK_THRESHOLD[rank.index()]
}

/// Fill defense/magic/resistance/agility/speed as fixed fractions of attack
///
/// The fractions are 0.6 / 0.5 / 0.4 / 0.7 / 0.8 respectively, floored.
/// Used when synthesizing a baseline for a rank+level pair with no other
/// input; all other fields pass through untouched.
pub fn derive_secondary_stats(stats: Stats) -> Stats {
    let attack = stats.attack;
    Stats {
        defense: attack * 6 / 10,
        magic: attack * 5 / 10,
        resistance: attack * 4 / 10,
        agility: attack * 7 / 10,
        speed: attack * 8 / 10,
        ..stats
    }
}

/// Basic Impact Point formula over the primary attributes
///
/// `floor(hp/10 + energy/5 + attack + defense + magic + resistance*2
/// + agility*1.5 + speed*1.2)`, computed exactly by scaling the sum by 10.
/// This is the variant progression uses for rank baselines and gating.
pub fn impact_points(stats: &Stats) -> i64 {
    (stats.hp
        + 2 * stats.energy
        + 10 * (stats.attack + stats.defense + stats.magic)
        + 20 * stats.resistance
        + 15 * stats.agility
        + 12 * stats.speed)
        / 10
}

/// Extended Impact Point formula, adding the secondary-stat terms
///
/// Basic formula plus `crit*2 + crit_damage/10 + dodge*1.5
/// + spell_damage/5 + healing_power/3`, computed exactly by scaling the sum
/// by 30. This is the power-scoring variant applied to fully resolved
/// effective-stat snapshots (equipment and set bonuses already summed).
/// Kept deliberately separate from [`impact_points`]; the two diverge once
/// secondary stats are present and must not be unified.
pub fn impact_points_extended(stats: &Stats) -> i64 {
    (3 * stats.hp
        + 6 * stats.energy
        + 30 * (stats.attack + stats.defense + stats.magic)
        + 60 * stats.resistance
        + 45 * stats.agility
        + 36 * stats.speed
        + 60 * stats.crit_chance
        + 3 * stats.crit_damage
        + 45 * stats.dodge_chance
        + 6 * stats.spell_damage
        + 10 * stats.healing_power)
        / 30
}

/// Synthesize the full baseline stat block for a rank and level
///
/// HP/Energy/Attack from their formulas, secondaries derived from attack,
/// fatigue zeroed, Impact Points recomputed with the basic formula.
pub fn base_stats(rank: Rank, level: u32) -> Stats {
    let mut stats = derive_secondary_stats(Stats {
        hp: hp_for(rank, level),
        energy: energy_for(rank, level),
        attack: attack_for(rank, level),
        fatigue: 0,
        ..Stats::default()
    });
    stats.impact_points = impact_points(&stats);
    stats
}
