// Fri Oct 16 2026 - Alex

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EventNotRegistered,
    SpellIdNotRegistered,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::EventNotRegistered => "Event isn't registered",
            FailureKind::SpellIdNotRegistered => "SpellID not registered",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub function: String,
    pub spell_id: String,
    pub line: usize,
}

impl ValidationFailure {
    pub fn event_not_registered(function: impl Into<String>, spell_id: impl Into<String>, line: usize) -> Self {
        Self {
            kind: FailureKind::EventNotRegistered,
            function: function.into(),
            spell_id: spell_id.into(),
            line,
        }
    }

    pub fn spell_id_not_registered(function: impl Into<String>, spell_id: impl Into<String>, line: usize) -> Self {
        Self {
            kind: FailureKind::SpellIdNotRegistered,
            function: function.into(),
            spell_id: spell_id.into(),
            line,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}\t{}", self.kind, self.function, self.spell_id)
    }
}
