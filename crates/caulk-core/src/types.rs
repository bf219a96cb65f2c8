use serde::{Deserialize, Serialize};

/// Stable identifiers for the ten contract rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// Actor-suffixed interface does not transitively implement the actor marker interface.
    A001,
    /// Enum member lacks the enum-serialization marker.
    A002,
    /// Property on an actor-implementing class lacks the naming marker.
    A003,
    /// Composite type in an actor method signature lacks the contract marker
    /// (catch-all; superseded in practice by A005/A006 and never emitted).
    A004,
    /// Actor method parameter type lacks the contract marker.
    A005,
    /// Actor method return type lacks the contract marker.
    A006,
    /// Collection element type in an actor method signature lacks the contract marker.
    A007,
    /// Record lacks the contract marker, or a record member lacks the per-member marker.
    A008,
    /// Actor class implements no interface that transitively implements the actor marker.
    A009,
    /// Type lacks both a public parameterless constructor and the contract marker.
    A010,
}

impl RuleId {
    pub const ALL: [RuleId; 10] = [
        RuleId::A001,
        RuleId::A002,
        RuleId::A003,
        RuleId::A004,
        RuleId::A005,
        RuleId::A006,
        RuleId::A007,
        RuleId::A008,
        RuleId::A009,
        RuleId::A010,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RuleId::A001 => "A001",
            RuleId::A002 => "A002",
            RuleId::A003 => "A003",
            RuleId::A004 => "A004",
            RuleId::A005 => "A005",
            RuleId::A006 => "A006",
            RuleId::A007 => "A007",
            RuleId::A008 => "A008",
            RuleId::A009 => "A009",
            RuleId::A010 => "A010",
        }
    }

    /// Default severity. Fixed per rule; not configurable.
    pub fn severity(&self) -> Severity {
        match self {
            RuleId::A001 | RuleId::A009 | RuleId::A010 => Severity::Error,
            RuleId::A003 => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            RuleId::A001 => "interface",
            _ => "serialization",
        }
    }

    pub fn from_code(code: &str) -> Option<RuleId> {
        RuleId::ALL.iter().copied().find(|r| r.code() == code)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur at the host boundary (model/snapshot loading).
///
/// The analysis engine itself never fails a pass: inconsistent declarations
/// are skipped and fix-shape mismatches return the input tree unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Declaration not found: {0}")]
    DeclarationNotFound(String),

    #[error("Unknown rule code: {0}")]
    UnknownRule(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),
}
