//! CombatResult - outcome of a single exchange

use crate::types::DamageSchool;
use serde::{Deserialize, Serialize};

/// What one resolved attack did
///
/// `damage` is always populated, even when `dodged` is set - a dodged hit
/// records the number that would have landed, and the caller suppresses the
/// HP application. `critical` and `blocked` are independent rolls; both can
/// be set on the same exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    /// Label of the acting side, filled by the caller
    pub attacker: String,
    /// Label of the receiving side, filled by the caller
    pub defender: String,
    /// Final damage after every modifier, never below 1
    pub damage: i64,
    /// School the damage was dealt in
    pub school: DamageSchool,
    pub critical: bool,
    pub blocked: bool,
    pub dodged: bool,
}

impl CombatResult {
    /// Get a one-line summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} damage", self.damage)];

        if self.school.is_elemental() {
            parts.push(format!("{} school", self.school));
        }
        if self.critical {
            parts.push("critical".to_string());
        }
        if self.blocked {
            parts.push("blocked".to_string());
        }
        if self.dodged {
            parts.push("dodged".to_string());
        }

        parts.join(", ")
    }
}
