// Fri Oct 16 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SPELL_ID_EQUALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)spellid == (\d+)").unwrap()
});

static SPELL_ID_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)IsSpellID\(([^)]+)\)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellIdUsage {
    pub function: String,
    pub spell_id: String,
    pub line: usize,
}

impl SpellIdUsage {
    pub fn new(function: impl Into<String>, spell_id: impl Into<String>, line: usize) -> Self {
        Self {
            function: function.into(),
            spell_id: spell_id.into(),
            line,
        }
    }
}

pub struct UsageExtractor;

impl UsageExtractor {
    pub fn spell_ids(line: &str) -> Vec<String> {
        let mut found: Vec<String> = SPELL_ID_EQUALS
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        for caps in SPELL_ID_CALL.captures_iter(line) {
            if let Some(args) = caps.get(1) {
                found.extend(Self::split_arguments(args.as_str()));
            }
        }

        found
    }

    pub fn extract(function: &str, line: &str, line_number: usize) -> Vec<SpellIdUsage> {
        Self::spell_ids(line)
            .into_iter()
            .map(|spell_id| SpellIdUsage::new(function, spell_id, line_number))
            .collect()
    }

    fn split_arguments(args: &str) -> impl Iterator<Item = String> + '_ {
        args.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}
