//! Skill catalog loading

use super::ConfigError;
use crate::types::Skill;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Container for skill definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub skills: Vec<Skill>,
}

/// Lookup failure against the skill catalog
#[derive(Error, Debug)]
#[error("Unknown skill id: {id}")]
pub struct UnknownSkill {
    pub id: String,
}

/// Load skill definitions from a TOML file
pub fn load_skill_configs(path: &Path) -> Result<HashMap<String, Skill>, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    Ok(into_map(config))
}

/// Load skill definitions from a TOML string
pub fn parse_skill_configs(content: &str) -> Result<HashMap<String, Skill>, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    Ok(into_map(config))
}

fn into_map(config: SkillsConfig) -> HashMap<String, Skill> {
    let mut map = HashMap::new();
    for skill in config.skills {
        map.insert(skill.id.clone(), skill);
    }
    map
}

/// Get the built-in skill catalog
pub fn default_skills() -> HashMap<String, Skill> {
    let toml = include_str!("../../config/skills.toml");
    parse_skill_configs(toml).unwrap_or_else(|_| {
        let mut map = HashMap::new();
        map.insert(Skill::basic_attack().id.clone(), Skill::basic_attack());
        map
    })
}

/// Look up a skill by id, failing loudly on a miss
pub fn get_skill<'a>(catalog: &'a HashMap<String, Skill>, id: &str) -> Result<&'a Skill, UnknownSkill> {
    catalog.get(id).ok_or_else(|| UnknownSkill { id: id.to_string() })
}

/// Look up a skill by id, falling back to the basic attack on a miss
pub fn get_skill_or_basic(catalog: &HashMap<String, Skill>, id: &str) -> Skill {
    catalog.get(id).cloned().unwrap_or_else(Skill::basic_attack)
}
