//! Statement parser.
//!
//! Groups the scanner's tokens into `keyword [:] value` runs and writes each
//! run into the matching [`Statement`] slot. Text before any keyword goes to
//! `today` with an empty key. Parsing never fails.

use std::str::Chars;

use super::classify::Indicators;
use super::scanner::Scanner;
use super::statement::{FlagField, Statement, TextField};
use super::token::{Token, TokenKind};

/// Parser with a single token of pushback.
#[derive(Debug)]
pub struct Parser<I: Iterator<Item = char>> {
    scanner: Scanner<I>,
    /// Last token handed back by [`Parser::unscan`].
    buf: Option<Token>,
    indicators: Indicators,
}

impl<'a> Parser<Chars<'a>> {
    /// Parser over an in-memory string.
    #[must_use]
    pub fn for_text(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parser using the built-in indicator tables.
    #[must_use]
    pub fn new(chars: I) -> Self {
        Self::with_indicators(chars, Indicators::default())
    }

    #[must_use]
    pub fn with_indicators(chars: I, indicators: Indicators) -> Self {
        Self {
            scanner: Scanner::new(chars),
            buf: None,
            indicators,
        }
    }

    /// Consume the input and return the statement it describes.
    #[must_use]
    pub fn parse(mut self) -> Statement {
        let mut stmt = Statement::default();

        loop {
            let (mut key, _) = self.scan_ignore_whitespace();
            if key.kind == TokenKind::Eof {
                break;
            }

            // Text without a leading keyword belongs to today.
            if !key.kind.is_keyword() {
                self.unscan(key);
                key = Token::new(TokenKind::Today, "");
            }

            let (colon, _) = self.scan_ignore_whitespace();
            if colon.kind != TokenKind::Colon {
                self.unscan(colon);
            }

            let value = normalize_value(self.collect_value().as_slice());
            tracing::debug!(kind = %key.kind, key = %key.literal, value = %value, "parsed field");
            self.assign(&mut stmt, key, value);
        }

        stmt
    }

    /// Gather the raw pieces of a value up to the next keyword or the end.
    fn collect_value(&mut self) -> Vec<String> {
        let mut pieces = Vec::new();

        loop {
            let (tok, ws) = self.scan_ignore_whitespace();
            if tok.kind.is_keyword() || tok.kind == TokenKind::Eof {
                self.unscan(tok);
                break;
            }
            if matches!(tok.kind, TokenKind::Word | TokenKind::Colon) {
                pieces.push(ws);
                pieces.push(tok.literal);
            }
        }

        pieces
    }

    /// Write a value into the slot named by `key`; a repeated keyword
    /// replaces the earlier value.
    fn assign(&self, stmt: &mut Statement, key: Token, value: String) {
        let Token { kind, literal } = key;
        match kind {
            TokenKind::Today => stmt.today = TextField::new(literal, value),
            TokenKind::Yesterday => stmt.yesterday = TextField::new(literal, value),
            TokenKind::Meetings => stmt.meetings = TextField::new(literal, value),
            TokenKind::Blockers => stmt.blockers = TextField::new(literal, value),
            TokenKind::TimeLog => stmt.time_log = self.flag(literal, value),
            TokenKind::IssueTracker => stmt.issue_tracker = self.flag(literal, value),
            TokenKind::Eof | TokenKind::Whitespace | TokenKind::Colon | TokenKind::Word => {}
        }
    }

    fn flag(&self, key: String, lit: String) -> FlagField {
        let classification = self.indicators.classify(&lit);
        if !classification.is_valid() {
            tracing::debug!(key = %key, lit = %lit, verdict = %classification.verdict, "flag needs review");
        }
        FlagField {
            key,
            val: classification.value,
            lit,
            valid: classification.is_valid(),
        }
    }

    /// Next token, taking the pushed-back one first.
    fn scan(&mut self) -> Token {
        self.buf.take().unwrap_or_else(|| self.scanner.next_token())
    }

    /// Next token, skipping one whitespace token. Returns the skipped
    /// whitespace (or an empty string) alongside it.
    fn scan_ignore_whitespace(&mut self) -> (Token, String) {
        let tok = self.scan();
        if tok.kind == TokenKind::Whitespace {
            return (self.scan(), tok.literal);
        }
        (tok, String::new())
    }

    /// Push a token back so the next scan returns it again.
    fn unscan(&mut self, tok: Token) {
        debug_assert!(self.buf.is_none(), "parser pushback holds one token");
        tracing::trace!(kind = %tok.kind, literal = %tok.literal, "unscan");
        self.buf = Some(tok);
    }
}

/// Parse a standup message with the built-in indicator tables.
#[must_use]
pub fn parse_statement(text: &str) -> Statement {
    Parser::for_text(text).parse()
}

/// Join raw value pieces, trim the whole, then trim each line.
#[must_use]
pub fn normalize_value<S: AsRef<str>>(pieces: &[S]) -> String {
    let joined: String = pieces.iter().map(AsRef::as_ref).collect();
    joined
        .trim()
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}
