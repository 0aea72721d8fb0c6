//! Lexical scanner for standup text.
//!
//! The scanner pulls characters from any `char` iterator and keeps a single
//! character of pushback. It never fails: anything it does not recognise is
//! returned as a [`TokenKind::Word`].

use std::str::Chars;

use super::token::{keyword_kind, Token, TokenKind};

/// Narrow unicode space sometimes pasted from chat clients.
const EN_SPACE: char = '\u{2002}';

/// Scanner over a character source.
#[derive(Debug)]
pub struct Scanner<I: Iterator<Item = char>> {
    chars: I,
    pushback: Option<char>,
}

impl<'a> Scanner<Chars<'a>> {
    /// Scanner over an in-memory string.
    #[must_use]
    pub fn for_text(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    #[must_use]
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            pushback: None,
        }
    }

    /// Return the next token and its literal text.
    pub fn next_token(&mut self) -> Token {
        let Some(ch) = self.read() else {
            return Token::eof();
        };

        if is_whitespace(ch) {
            return self.scan_whitespace(ch);
        }

        if ch == ':' {
            return Token::new(TokenKind::Colon, ":");
        }

        self.scan_word(ch)
    }

    /// Consume `first` and every whitespace character after it.
    fn scan_whitespace(&mut self, first: char) -> Token {
        let mut buf = String::from(first);

        while let Some(ch) = self.read() {
            if !is_whitespace(ch) {
                self.unread(ch);
                break;
            }
            buf.push(ch);
        }

        Token::new(TokenKind::Whitespace, buf)
    }

    /// Consume `first` and everything up to a line break, colon, or the end.
    fn scan_word(&mut self, first: char) -> Token {
        let mut buf = String::from(first);

        while let Some(ch) = self.read() {
            if is_line_break(ch) || ch == ':' {
                self.unread(ch);
                break;
            }
            buf.push(ch);
        }

        let kind = keyword_kind(&buf).unwrap_or(TokenKind::Word);
        Token::new(kind, buf)
    }

    fn read(&mut self) -> Option<char> {
        self.pushback.take().or_else(|| self.chars.next())
    }

    fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "scanner pushback holds one char");
        self.pushback = Some(ch);
    }
}

/// Yields tokens up to, but not including, end of input.
impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == EN_SPACE || is_line_break(ch)
}

const fn is_line_break(ch: char) -> bool {
    ch == '\n'
}
