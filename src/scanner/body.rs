// Fri Oct 16 2026 - Alex

use crate::scanner::classify::{BodyLine, LineClassifier};
use crate::scanner::extract::{SpellIdUsage, UsageExtractor};
use crate::scanner::failure::ValidationFailure;
use crate::scanner::registry::EventRegistry;
use crate::scanner::validator::SpellIdValidator;

/// Handlers that check spellIDs on purpose without registering them.
pub const DEFAULT_SKIP_FUNCTIONS: &[&str] = &["SPELL_INTERRUPT", "OnCombatStart"];

const UNIT_EVENT_PREFIX: &str = "unit_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Code,
    BlockComment,
}

#[derive(Debug, Clone)]
pub struct SkipList {
    names: Vec<String>,
}

impl SkipList {
    pub fn new() -> Self {
        Self {
            names: DEFAULT_SKIP_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn is_skipped(&self, function: &str) -> bool {
        function.to_lowercase().starts_with(UNIT_EVENT_PREFIX)
            || self.names.iter().any(|name| name == function)
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self::new()
    }
}

/// Second pass over a file. The current function is whichever
/// `function mod:NAME` line was seen last; there is no end marker.
pub struct BodyScanner<'a> {
    validator: SpellIdValidator<'a>,
    skip: &'a SkipList,
    comment: CommentState,
    current_function: Option<String>,
    failures: Vec<ValidationFailure>,
}

impl<'a> BodyScanner<'a> {
    pub fn new(registry: &'a EventRegistry, skip: &'a SkipList) -> Self {
        Self {
            validator: SpellIdValidator::new(registry),
            skip,
            comment: CommentState::Code,
            current_function: None,
            failures: Vec::new(),
        }
    }

    pub fn comment_state(&self) -> CommentState {
        self.comment
    }

    pub fn current_function(&self) -> Option<&str> {
        self.current_function.as_deref()
    }

    /// Feeds one raw line; `line_number` is 1-based.
    pub fn feed(&mut self, raw_line: &str, line_number: usize) {
        let line = raw_line.trim();

        match LineClassifier::classify_body(line) {
            BodyLine::BlockCommentOpen => self.comment = CommentState::BlockComment,
            BodyLine::BlockCommentClose => self.comment = CommentState::Code,
            _ if self.comment == CommentState::BlockComment => {}
            BodyLine::LineComment => {}
            BodyLine::FunctionStart(name) => self.current_function = Some(name),
            BodyLine::Code => {
                for usage in self.usages(line, line_number) {
                    if let Some(failure) = self.validator.check(&usage) {
                        self.failures.push(failure);
                    }
                }
            }
        }
    }

    fn usages(&self, line: &str, line_number: usize) -> Vec<SpellIdUsage> {
        match self.current_function.as_deref() {
            Some(function) if !self.skip.is_skipped(function) => {
                UsageExtractor::extract(function, line, line_number)
            }
            _ => Vec::new(),
        }
    }

    pub fn finish(self) -> Vec<ValidationFailure> {
        self.failures
    }
}
