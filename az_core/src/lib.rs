//! az_core - Combat and progression engine for the A-Z rank system
//!
//! This library provides:
//! - Stat formulas: rank/level stat curves and impact point scoring
//! - Progression: XP, level-ups, stat allocation, and rank advancement
//! - Combat: single-attack resolution, status effects, and fight simulation
//! - Config: the TOML skill catalog

pub mod character;
pub mod combat;
pub mod config;
pub mod formulas;
pub mod progression;
pub mod types;

// Re-export core types for convenience
pub use character::Character;
pub use combat::{
    apply_status_effect, can_use_skill, resolve_attack, resolve_attack_with_rng, simulate,
    simulate_with_rng, CombatResult, Combatant, EffectKind, ModifierTarget, Side,
    SimulationOutcome, StatusEffect,
};
pub use config::default_skills;
pub use formulas::{base_stats, impact_points, impact_points_extended};
pub use progression::{
    add_experience, can_level_up, can_rank_up, get_level_progress, get_rank_progress, level_up,
    rank_up, LevelProgress, LevelUpReward, ProgressionError, ProgressionOutcome, RankProgress,
    StatAllocation,
};
pub use types::{DamageSchool, PlayerClass, Rank, Skill, Stats, MAX_LEVEL};
