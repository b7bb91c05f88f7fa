//! Event categories for school calendar entries.
//!
//! Every event is shown as one of five kinds. Source records may name their
//! category explicitly; otherwise it is inferred from the title text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The kind of a school event, used for grouping and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Term,
    Holiday,
    Exam,
    #[serde(rename = "pd")]
    ProfessionalDevelopment,
    /// Anything that does not match a more specific category.
    Event,
}

impl EventCategory {
    /// All categories in legend order.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Term,
        EventCategory::Holiday,
        EventCategory::Exam,
        EventCategory::ProfessionalDevelopment,
        EventCategory::Event,
    ];

    /// Stable lowercase key, as used in JSON data.
    pub fn key(self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Holiday => "holiday",
            Self::Exam => "exam",
            Self::ProfessionalDevelopment => "pd",
            Self::Event => "event",
        }
    }

    /// Human label for legends and lists.
    pub fn label(self) -> &'static str {
        match self {
            Self::Term => "Term",
            Self::Holiday => "Holiday",
            Self::Exam => "Exam",
            Self::ProfessionalDevelopment => "PD Day",
            Self::Event => "Event",
        }
    }

    /// Look up a category by key. Case-insensitive; surrounding space is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Infer a category from free-text title. First matching rule wins.
    pub fn infer(title: &str) -> Self {
        let title = title.to_lowercase();
        let rules = inference_rules();

        if rules.term.is_match(&title) {
            Self::Term
        } else if rules.holiday.is_match(&title) {
            Self::Holiday
        } else if rules.professional_development.is_match(&title) {
            Self::ProfessionalDevelopment
        } else if rules.exam.is_match(&title) {
            Self::Exam
        } else {
            Self::Event
        }
    }

    /// Use the explicit key when it names a known category, else infer from the title.
    pub fn resolve(explicit: Option<&str>, title: &str) -> Self {
        match explicit.map(str::trim).filter(|key| !key.is_empty()) {
            Some(key) => Self::from_key(key).unwrap_or_else(|| {
                log::debug!("Unknown category '{}' for '{}', inferring from title", key, title);
                Self::infer(title)
            }),
            None => Self::infer(title),
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Word boundaries are ASCII-only: accented letters next to a keyword
/// do not join it into a longer word.
struct InferenceRules {
    term: Regex,
    holiday: Regex,
    professional_development: Regex,
    exam: Regex,
}

fn inference_rules() -> &'static InferenceRules {
    static RULES: OnceLock<InferenceRules> = OnceLock::new();
    RULES.get_or_init(|| InferenceRules {
        term: compile(
            r"(?-u:\b)term(?-u:\b).*(begins|ends|starts)|(begins|ends|starts).*(?-u:\b)term(?-u:\b)|(?-u:\b)innovation term(?-u:\b)",
        ),
        holiday: compile(
            r"(?-u:\b)break(?-u:\b)|holiday|christmas|thanksgiving|good friday|new year|reconciliation|goodwill|heritage|human rights|freedom|workers|youth|family day|women's day",
        ),
        professional_development: compile(
            r"(?-u:\b)faculty|in-service|no school|parent-teacher|student-led conferences",
        ),
        exam: compile(r"(?-u:\b)exam(?-u:\b)"),
    })
}

fn compile(pattern: &str) -> Regex {
    // Patterns are literals above; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid category pattern {pattern:?}: {e}"))
}
