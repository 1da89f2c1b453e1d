//! Media query lexer — splits a query list into tokens.
//!
//! Tokens borrow their text from the input; the parser walks them by index.
//! The lexer never fails: characters it does not recognize become
//! [`TokenKind::Delim`] tokens, which the parser rejects in context.

use std::sync::LazyLock;

use regex::Regex;

/// A token from the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'a str,
}

/// Source span (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Not, Only, And,

    // Words
    Identifier,
    /// Number with optional unit: `2`, `1.5`, `3e1dpcm`, `48em`.
    Number,
    /// Browser hack fragment: `\0`, `\\0`, `\9`.
    Hack,

    // Punctuation
    LParen, RParen, Colon, Comma, Slash,

    /// Any single character nothing else matched.
    Delim,

    Eof,
}

// Anchored at the scan position; tried in the order they appear in `tokenize`.
static HACK: LazyLock<Regex> = LazyLock::new(|| compile(r"^\\{1,2}[09]"));
static IDENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^-*(?:[_a-zA-Z]|[^\x00-\x7F])(?:[_a-zA-Z0-9-]|[^\x00-\x7F])*"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?(?:[a-zA-Z%]+)?")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid lexer regex {pattern:?}: {err}"))
}

/// Tokenize a media query list.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        let rest = &input[pos..];

        // Skip whitespace (newlines included)
        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        let (kind, len) = match ch {
            ',' => (TokenKind::Comma, 1),
            '(' => (TokenKind::LParen, 1),
            ')' => (TokenKind::RParen, 1),
            ':' => (TokenKind::Colon, 1),
            '/' => (TokenKind::Slash, 1),
            _ => {
                if let Some(m) = HACK.find(rest) {
                    (TokenKind::Hack, m.end())
                } else if let Some(m) = IDENT.find(rest) {
                    (keyword_or_ident(m.as_str()), m.end())
                } else if let Some(m) = NUMBER.find(rest) {
                    (TokenKind::Number, m.end())
                } else {
                    (TokenKind::Delim, ch.len_utf8())
                }
            }
        };

        tokens.push(Token {
            kind,
            span: Span { start: pos, end: pos + len },
            text: &rest[..len],
        });
        pos += len;
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { start: input.len(), end: input.len() },
        text: "",
    });

    tokens
}

fn keyword_or_ident(s: &str) -> TokenKind {
    match s.to_ascii_lowercase().as_str() {
        "not" => TokenKind::Not,
        "only" => TokenKind::Only,
        "and" => TokenKind::And,
        _ => TokenKind::Identifier,
    }
}
