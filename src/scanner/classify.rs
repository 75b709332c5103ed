// Fri Oct 16 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

pub const BLOCK_COMMENT_OPEN: &str = "--[[";
pub const BLOCK_COMMENT_CLOSE: &str = "--]]";
pub const LINE_COMMENT: &str = "--";
pub const REGISTRATION_CLOSE: &str = ")";

// `mod:RegisterEvents(`, `self:RegisterEventsInCombat(`, `mod:RegisterShortTermEvents(`
static REGISTER_EVENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(mod|self):Register(ShortTermEvents|Events(InCombat)?)\(").unwrap()
});

// `"EVENT_NAME 1234 5678",`
static EVENT_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"([^\s"]+)\s?([\d\s]+)?",?"#).unwrap()
});

// `mod.EVENT1 = mod.EVENT2`
static CROSS_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^mod\.(.*?)\s?=\s?mod\.(.*?)$").unwrap()
});

static FUNCTION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^function mod:(\w+)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationLine {
    BlockStart,
    BlockEnd,
    Event { name: String, spell_ids: Vec<String> },
    CrossReference { left: String, right: String },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    BlockCommentOpen,
    BlockCommentClose,
    LineComment,
    FunctionStart(String),
    Code,
}

pub struct LineClassifier;

impl LineClassifier {
    pub fn is_registration_start(line: &str) -> bool {
        REGISTER_EVENTS.is_match(line)
    }

    pub fn is_registration_end(line: &str) -> bool {
        line == REGISTRATION_CLOSE
    }

    pub fn parse_event_declaration(line: &str) -> Option<(String, Vec<String>)> {
        let caps = EVENT_DECLARATION.captures(line)?;
        let name = caps.get(1)?.as_str().to_string();
        let spell_ids = caps
            .get(2)
            .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Some((name, spell_ids))
    }

    pub fn parse_cross_reference(line: &str) -> Option<(String, String)> {
        let caps = CROSS_REFERENCE.captures(line)?;
        let left = caps.get(1)?.as_str().trim();
        let right = caps.get(2)?.as_str().trim();
        if left.is_empty() || right.is_empty() {
            return None;
        }
        Some((left.to_string(), right.to_string()))
    }

    pub fn parse_function_start(line: &str) -> Option<String> {
        FUNCTION_START
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Classifies a line for pass 1. `collecting` is true while inside a
    /// registration call; block end and event declarations only count there.
    pub fn classify_registration(line: &str, collecting: bool) -> RegistrationLine {
        if Self::is_registration_start(line) {
            return RegistrationLine::BlockStart;
        }

        if collecting {
            if Self::is_registration_end(line) {
                return RegistrationLine::BlockEnd;
            }
            if let Some((name, spell_ids)) = Self::parse_event_declaration(line) {
                return RegistrationLine::Event { name, spell_ids };
            }
        }

        match Self::parse_cross_reference(line) {
            Some((left, right)) => RegistrationLine::CrossReference { left, right },
            None => RegistrationLine::Other,
        }
    }

    pub fn classify_body(line: &str) -> BodyLine {
        if line == BLOCK_COMMENT_OPEN {
            BodyLine::BlockCommentOpen
        } else if line == BLOCK_COMMENT_CLOSE {
            BodyLine::BlockCommentClose
        } else if line.starts_with(LINE_COMMENT) {
            BodyLine::LineComment
        } else if let Some(name) = Self::parse_function_start(line) {
            BodyLine::FunctionStart(name)
        } else {
            BodyLine::Code
        }
    }
}
