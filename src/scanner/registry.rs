// Fri Oct 16 2026 - Alex

use crate::scanner::classify::{LineClassifier, RegistrationLine};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration<'a> {
    NotRegistered,
    Wildcard,
    Explicit(&'a [String]),
}

/// Event name to declared spellIDs for a single file.
///
/// An empty list means the event was registered without spellIDs and accepts
/// any of them. A missing key means the event was never registered. Lists are
/// kept in declaration order and may hold duplicates after cross-references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventRegistry {
    events: IndexMap<String, Vec<String>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = RegistryBuilder::new();
        for line in lines {
            builder.feed(line);
        }
        builder.finish()
    }

    /// Makes sure `event` exists. An existing list is left untouched.
    pub fn declare_wildcard(&mut self, event: &str) {
        self.events.entry(event.to_string()).or_default();
    }

    pub fn declare_spell_ids<I, S>(&mut self, event: &str, spell_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.events.entry(event.to_string()).or_default();
        entry.extend(spell_ids.into_iter().map(Into::into));
    }

    /// Merges two events into each other by concatenation. `right` receives
    /// `left`'s list first, then `left` receives the updated `right`.
    pub fn cross_reference(&mut self, left: &str, right: &str) {
        self.declare_wildcard(left);
        self.declare_wildcard(right);

        let from_left = self.events.get(left).cloned().unwrap_or_default();
        if let Some(target) = self.events.get_mut(right) {
            target.extend(from_left);
        }

        let from_right = self.events.get(right).cloned().unwrap_or_default();
        if let Some(target) = self.events.get_mut(left) {
            target.extend(from_right);
        }
    }

    pub fn lookup(&self, event: &str) -> Registration<'_> {
        match self.events.get(event) {
            None => Registration::NotRegistered,
            Some(ids) if ids.is_empty() => Registration::Wildcard,
            Some(ids) => Registration::Explicit(ids),
        }
    }

    pub fn spell_ids(&self, event: &str) -> Option<&[String]> {
        self.events.get(event).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationState {
    #[default]
    Idle,
    Collecting,
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    state: RegistrationState,
    registry: EventRegistry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RegistrationState {
        self.state
    }

    pub fn feed(&mut self, raw_line: &str) {
        let line = raw_line.trim();
        let collecting = self.state == RegistrationState::Collecting;

        match LineClassifier::classify_registration(line, collecting) {
            RegistrationLine::BlockStart => {
                self.state = RegistrationState::Collecting;
            }
            RegistrationLine::BlockEnd => {
                self.state = RegistrationState::Idle;
            }
            RegistrationLine::Event { name, spell_ids } => {
                if spell_ids.is_empty() {
                    self.registry.declare_wildcard(&name);
                } else {
                    self.registry.declare_spell_ids(&name, spell_ids);
                }
            }
            RegistrationLine::CrossReference { left, right } => {
                log::trace!("Cross-reference: {} <-> {}", left, right);
                self.registry.cross_reference(&left, &right);
            }
            RegistrationLine::Other => {}
        }
    }

    pub fn finish(self) -> EventRegistry {
        self.registry
    }
}
