// Fri Oct 16 2026 - Alex

use crate::scanner::extract::SpellIdUsage;
use crate::scanner::failure::ValidationFailure;
use crate::scanner::registry::{EventRegistry, Registration};

pub struct SpellIdValidator<'a> {
    registry: &'a EventRegistry,
}

impl<'a> SpellIdValidator<'a> {
    pub fn new(registry: &'a EventRegistry) -> Self {
        Self { registry }
    }

    pub fn check(&self, usage: &SpellIdUsage) -> Option<ValidationFailure> {
        match self.registry.lookup(&usage.function) {
            Registration::NotRegistered => Some(ValidationFailure::event_not_registered(
                usage.function.as_str(),
                usage.spell_id.as_str(),
                usage.line,
            )),
            Registration::Explicit(ids) if !ids.iter().any(|id| *id == usage.spell_id) => {
                Some(ValidationFailure::spell_id_not_registered(
                    usage.function.as_str(),
                    usage.spell_id.as_str(),
                    usage.line,
                ))
            }
            Registration::Explicit(_) | Registration::Wildcard => None,
        }
    }
}
