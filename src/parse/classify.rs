//! Boolean inference for status fields such as "LP: up to date".
//!
//! Classification tests the whole value against two indicator tables. The
//! tables are plain pattern lists so they can be extended from configuration
//! without changing the decision rule in [`Indicators::classify`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Built-in patterns that suggest a negative answer.
pub const NEGATIVE_PATTERNS: &[&str] = &["no", "off", "updating", "negative"];

/// Built-in patterns that suggest a positive answer.
pub const POSITIVE_PATTERNS: &[&str] = &[
    "done",
    "yes",
    r"up\s+to\s+date",
    "ok",
    "1",
    "affirmative",
    "current",
    "updated",
];

static DEFAULT_INDICATORS: Lazy<Indicators> = Lazy::new(|| {
    Indicators::build(NEGATIVE_PATTERNS, POSITIVE_PATTERNS)
        .unwrap_or_else(|e| panic!("Invalid built-in indicator regex: {e}"))
});

/// How confidently a value was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Exactly one polarity matched.
    Clear,
    /// Both polarities matched.
    Ambiguous,
    /// Neither polarity matched.
    Unclear,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Clear => "clear",
            Self::Ambiguous => "ambiguous",
            Self::Unclear => "unclear",
        })
    }
}

/// Result of classifying a value. `value` is a best guess even when the
/// verdict is not [`Verdict::Clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub value: bool,
    pub verdict: Verdict,
}

impl Classification {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.verdict, Verdict::Clear)
    }
}

/// Compiled negative and positive indicator tables.
#[derive(Debug, Clone)]
pub struct Indicators {
    negative: Regex,
    positive: Regex,
}

impl Default for Indicators {
    fn default() -> Self {
        DEFAULT_INDICATORS.clone()
    }
}

impl Indicators {
    /// Built-in tables extended with extra patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if any extra pattern is not a valid regex.
    pub fn with_extra(negative: &[String], positive: &[String]) -> Result<Self, regex::Error> {
        // Each pattern must compile on its own, not just inside the alternation.
        for pattern in negative.iter().chain(positive) {
            Regex::new(pattern)?;
        }

        let negative: Vec<&str> = NEGATIVE_PATTERNS
            .iter()
            .copied()
            .chain(negative.iter().map(String::as_str))
            .collect();
        let positive: Vec<&str> = POSITIVE_PATTERNS
            .iter()
            .copied()
            .chain(positive.iter().map(String::as_str))
            .collect();
        Self::build(&negative, &positive)
    }

    fn build(negative: &[&str], positive: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            negative: alternation(negative)?,
            positive: alternation(positive)?,
        })
    }

    /// Classify a normalized value as true or false.
    ///
    /// Matching is case-insensitive substring containment, so "not yet"
    /// counts as negative through "no".
    #[must_use]
    pub fn classify(&self, text: &str) -> Classification {
        let negative = self.negative.is_match(text);
        let positive = self.positive.is_match(text);

        match (positive, negative) {
            (true, false) => Classification {
                value: true,
                verdict: Verdict::Clear,
            },
            (false, true) => Classification {
                value: false,
                verdict: Verdict::Clear,
            },
            (true, true) => Classification {
                value: true,
                verdict: Verdict::Ambiguous,
            },
            (false, false) => Classification {
                value: true,
                verdict: Verdict::Unclear,
            },
        }
    }
}

/// Classify with the built-in indicator tables.
#[must_use]
pub fn classify_boolean(text: &str) -> Classification {
    DEFAULT_INDICATORS.classify(text)
}

fn alternation(patterns: &[&str]) -> Result<Regex, regex::Error> {
    let body = patterns
        .iter()
        .map(|p| format!("(?:{p})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){body}"))
}
