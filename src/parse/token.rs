//! Token kinds and the keyword vocabulary.

use serde::Serialize;

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// A run of whitespace, line breaks included.
    Whitespace,
    /// The `:` delimiter.
    Colon,
    /// Any run of text that is not a keyword.
    Word,
    /// `today`
    Today,
    /// `yesterday`, `weekend`, `friday`, ...
    Yesterday,
    /// `meeting`, `meetings`
    Meetings,
    /// `blocker`, `blockers`
    Blockers,
    /// Time-logging status: `time`, `hours`, `lp`
    TimeLog,
    /// Issue-tracker status: `jira`
    IssueTracker,
}

impl TokenKind {
    /// Whether this kind labels a statement field.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Today
                | Self::Yesterday
                | Self::Meetings
                | Self::Blockers
                | Self::TimeLog
                | Self::IssueTracker
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Eof => "eof",
            Self::Whitespace => "ws",
            Self::Colon => "colon",
            Self::Word => "word",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Meetings => "meetings",
            Self::Blockers => "blockers",
            Self::TimeLog => "time_log",
            Self::IssueTracker => "issue_tracker",
        })
    }
}

/// A token and the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    #[must_use]
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }
}

/// Normalized keyword spellings and the kind each one maps to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("TODAY", TokenKind::Today),
    ("YESTERDAY", TokenKind::Yesterday),
    ("WEEKEND", TokenKind::Yesterday),
    ("WEEK-END", TokenKind::Yesterday),
    ("FRIDAY", TokenKind::Yesterday),
    ("FRIDAY/WEEKEND", TokenKind::Yesterday),
    ("MEETING", TokenKind::Meetings),
    ("MEETINGS", TokenKind::Meetings),
    ("BLOCKER", TokenKind::Blockers),
    ("BLOCKERS", TokenKind::Blockers),
    ("TIME", TokenKind::TimeLog),
    ("HOURS", TokenKind::TimeLog),
    ("LP", TokenKind::TimeLog),
    ("JIRA", TokenKind::IssueTracker),
];

/// Characters stripped from both ends of a word before keyword lookup.
const DECORATION: &[char] = &['_', '*', '-', '+', '>'];

/// Reduce a word to the form used for keyword lookup.
///
/// Uppercases, strips bullet/emphasis decoration, then strips whitespace.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.to_uppercase()
        .trim_matches(DECORATION)
        .trim()
        .to_string()
}

/// Look up the keyword kind of a scanned word, if it is one.
#[must_use]
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    let normalized = normalize_word(word);
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == normalized)
        .map(|(_, kind)| *kind)
}
