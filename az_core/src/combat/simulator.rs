//! Full-fight simulation between two combatants

use super::resolver::{
    can_use_skill, consume_skill_resources, energy_regen, fatigue_recovery, resolve_attack_with_rng,
};
use super::result::CombatResult;
use crate::formulas::energy_for;
use crate::types::{Rank, Skill, Stats};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Turn bound used when the caller has no opinion
pub const DEFAULT_MAX_TURNS: u32 = 50;

/// A side in a simulated fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub stats: Stats,
    /// Skills in preference order; only the first is ever considered
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        Combatant {
            name: name.into(),
            stats,
            skills: Vec::new(),
        }
    }

    pub fn with_skills(name: impl Into<String>, stats: Stats, skills: Vec<Skill>) -> Self {
        Combatant {
            name: name.into(),
            stats,
            skills,
        }
    }
}

/// Which side won the fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

/// Outcome of a simulated fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub winner: Side,
    pub winner_name: String,
    /// Turns actually played, at most `max_turns`
    pub turns: u32,
    /// Every exchange, in order
    pub log: Vec<CombatResult>,
    /// Remaining stats on both sides when the fight ended
    pub attacker_stats: Stats,
    pub defender_stats: Stats,
}

/// Run a fight with the thread-local RNG
pub fn simulate(attacker: &Combatant, defender: &Combatant, max_turns: u32) -> SimulationOutcome {
    let mut rng = rand::thread_rng();
    simulate_with_rng(attacker, defender, max_turns, &mut rng)
}

/// Run a fight with a provided RNG (for seeded, reproducible fights)
///
/// Each turn the attacker acts first, then the defender if still alive.
/// An actor uses its first listed skill when its resource gates pass and
/// falls back to a basic attack otherwise; later skills are never tried.
/// A dodged hit costs the dodger nothing. After both actions, each side
/// regains energy (capped at the rank-A level-1 pool) and sheds fatigue.
///
/// Ties favor the attacker: a simultaneous knockout and an expired turn
/// limit both hand the attacker the win.
pub fn simulate_with_rng(
    attacker: &Combatant,
    defender: &Combatant,
    max_turns: u32,
    rng: &mut impl Rng,
) -> SimulationOutcome {
    let energy_cap = energy_for(Rank::A, 1);

    let mut atk = attacker.stats;
    let mut def = defender.stats;
    let mut log = Vec::new();
    let mut turns = 0;

    while turns < max_turns && atk.is_alive() && def.is_alive() {
        turns += 1;

        let (result, spent) = act(&atk, &def, &attacker.skills, rng);
        atk = spent;
        if !result.dodged {
            def.hp = (def.hp - result.damage).max(0);
        }
        log.push(labeled(result, &attacker.name, &defender.name));

        if def.is_alive() {
            let (result, spent) = act(&def, &atk, &defender.skills, rng);
            def = spent;
            if !result.dodged {
                atk.hp = (atk.hp - result.damage).max(0);
            }
            log.push(labeled(result, &defender.name, &attacker.name));
        }

        atk = end_of_turn(&atk, energy_cap);
        def = end_of_turn(&def, energy_cap);
    }

    let winner = if atk.is_alive() {
        Side::Attacker
    } else {
        Side::Defender
    };
    let winner_name = match winner {
        Side::Attacker => attacker.name.clone(),
        Side::Defender => defender.name.clone(),
    };

    SimulationOutcome {
        winner,
        winner_name,
        turns,
        log,
        attacker_stats: atk,
        defender_stats: def,
    }
}

/// One action: pick first skill or basic attack, resolve, pay costs
fn act(
    actor: &Stats,
    target: &Stats,
    skills: &[Skill],
    rng: &mut impl Rng,
) -> (CombatResult, Stats) {
    let basic = Skill::basic_attack();
    let (skill, is_real_skill) = match skills.first() {
        Some(first) if can_use_skill(actor, first) => (first, true),
        _ => (&basic, false),
    };

    let result = resolve_attack_with_rng(actor, target, skill, None, rng);
    let spent = if is_real_skill {
        consume_skill_resources(actor, skill)
    } else {
        *actor
    };
    (result, spent)
}

fn end_of_turn(stats: &Stats, energy_cap: i64) -> Stats {
    Stats {
        energy: (stats.energy + energy_regen(stats)).min(energy_cap),
        fatigue: (stats.fatigue - fatigue_recovery(stats)).max(0),
        ..*stats
    }
}

fn labeled(result: CombatResult, attacker: &str, defender: &str) -> CombatResult {
    CombatResult {
        attacker: attacker.to_string(),
        defender: defender.to_string(),
        ..result
    }
}
