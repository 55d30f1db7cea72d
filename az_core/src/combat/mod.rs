//! Combat - single-attack resolution, status effects, and full-fight simulation

pub mod effects;
pub mod resolver;
pub mod result;
pub mod simulator;

pub use effects::{apply_status_effect, EffectKind, ModifierTarget, StatusEffect};
pub use resolver::{
    block_chance, can_use_skill, consume_skill_resources, critical_chance, dodge_chance,
    energy_regen, fatigue_recovery, resolve_attack, resolve_attack_with_rng,
};
pub use result::CombatResult;
pub use simulator::{
    simulate, simulate_with_rng, Combatant, Side, SimulationOutcome, DEFAULT_MAX_TURNS,
};
