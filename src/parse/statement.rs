//! The structured record a standup message is parsed into.

use serde::{Deserialize, Serialize};

/// A free-text field such as "Today: ...".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    /// Label as written by the user; empty when the text had no keyword.
    pub key: String,
    /// Value with each line trimmed.
    pub val: String,
    /// True when `val` is non-empty.
    pub valid: bool,
}

impl TextField {
    #[must_use]
    pub fn new(key: impl Into<String>, val: impl Into<String>) -> Self {
        let val = val.into();
        Self {
            key: key.into(),
            valid: !val.is_empty(),
            val,
        }
    }

    /// Whether the input mentioned this field at all.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.key.is_empty() || !self.val.is_empty()
    }
}

/// A status field whose boolean value is inferred from text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagField {
    pub key: String,
    /// Inferred value; a best guess when `valid` is false.
    pub val: bool,
    /// The text the value was inferred from.
    pub lit: String,
    /// True when inference was unambiguous.
    pub valid: bool,
}

impl FlagField {
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.key.is_empty() || !self.lit.is_empty()
    }
}

/// Borrowed view of one statement field, used for display.
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    Text(&'a TextField),
    Flag(&'a FlagField),
}

impl FieldRef<'_> {
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Text(f) => f.is_set(),
            Self::Flag(f) => f.is_set(),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        match self {
            Self::Text(f) => f.valid,
            Self::Flag(f) => f.valid,
        }
    }
}

/// A parsed standup update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub yesterday: TextField,
    pub today: TextField,
    pub meetings: TextField,
    pub blockers: TextField,
    /// Whether time has been logged.
    #[serde(rename = "lp")]
    pub time_log: FlagField,
    /// Whether the issue tracker is up to date.
    #[serde(rename = "jira")]
    pub issue_tracker: FlagField,
}

impl Statement {
    /// Every field paired with its display name, in reading order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, FieldRef<'_>); 6] {
        [
            ("yesterday", FieldRef::Text(&self.yesterday)),
            ("today", FieldRef::Text(&self.today)),
            ("meetings", FieldRef::Text(&self.meetings)),
            ("blockers", FieldRef::Text(&self.blockers)),
            ("lp", FieldRef::Flag(&self.time_log)),
            ("jira", FieldRef::Flag(&self.issue_tracker)),
        ]
    }

    /// True when nothing at all was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, field)| !field.is_set())
    }

    /// Names of fields that were mentioned but could not be filled reliably.
    #[must_use]
    pub fn needs_review(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, field)| field.is_set() && !field.is_valid())
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_statement_is_empty() {
        let stmt = Statement::default();
        assert!(stmt.is_empty());
        assert!(stmt.needs_review().is_empty());
        assert!(stmt.fields().iter().all(|(_, f)| !f.is_valid()));
    }

    #[test]
    fn test_text_field_validity() {
        assert!(TextField::new("today", "work").valid);
        assert!(!TextField::new("today", "").valid);
        assert!(TextField::new("", "work").is_set());
        assert!(TextField::new("today", "").is_set());
        assert!(!TextField::default().is_set());
    }

    #[test]
    fn test_needs_review_lists_mentioned_invalid_fields() {
        let stmt = Statement {
            today: TextField::new("Today", "stuff"),
            blockers: TextField::new("blockers", ""),
            issue_tracker: FlagField {
                key: "Jira".to_string(),
                val: true,
                lit: "maybe".to_string(),
                valid: false,
            },
            ..Statement::default()
        };
        assert!(!stmt.is_empty());
        assert_eq!(stmt.needs_review(), vec!["blockers", "jira"]);
    }

    #[test]
    fn test_json_field_names() {
        let stmt = Statement {
            time_log: FlagField {
                key: "LP".to_string(),
                val: true,
                lit: "yes".to_string(),
                valid: true,
            },
            ..Statement::default()
        };
        let value = serde_json::to_value(&stmt).unwrap();
        assert_eq!(value["lp"]["key"], "LP");
        assert_eq!(value["lp"]["lit"], "yes");
        assert_eq!(value["lp"]["val"], true);
        assert_eq!(value["jira"]["valid"], false);
        assert_eq!(value["today"]["key"], "");
        assert_eq!(value["today"]["val"], "");
        assert!(value["today"].get("lit").is_none());
    }
}
