//! Validation phases and their canonical ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// One category of remote validation.
///
/// Phases execute in a fixed canonical order. Later phases assume earlier
/// ones already filtered gross syntax errors, so callers may omit phases
/// but never reorder them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Syntax,
    Semantic,
    Performance,
    Compliance,
    Security,
}

impl Phase {
    /// All phases in canonical execution order.
    pub const CANONICAL_ORDER: [Phase; 5] = [
        Phase::Syntax,
        Phase::Semantic,
        Phase::Performance,
        Phase::Compliance,
        Phase::Security,
    ];

    /// Position of this phase in the canonical order.
    pub fn rank(&self) -> usize {
        match self {
            Phase::Syntax => 0,
            Phase::Semantic => 1,
            Phase::Performance => 2,
            Phase::Compliance => 3,
            Phase::Security => 4,
        }
    }

    /// Wire name of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Syntax => "syntax",
            Phase::Semantic => "semantic",
            Phase::Performance => "performance",
            Phase::Compliance => "compliance",
            Phase::Security => "security",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "syntax" => Ok(Phase::Syntax),
            "semantic" => Ok(Phase::Semantic),
            "performance" => Ok(Phase::Performance),
            "compliance" => Ok(Phase::Compliance),
            "security" => Ok(Phase::Security),
            other => Err(ConfigurationError::UnknownPhase {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_rank() {
        for (index, phase) in Phase::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(phase.rank(), index);
        }
    }

    #[test]
    fn parse_round_trip() {
        for phase in Phase::CANONICAL_ORDER {
            assert_eq!(phase.as_str().parse::<Phase>(), Ok(phase));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "linting".parse::<Phase>().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownPhase {
                name: "linting".to_string()
            }
        );
    }
}
