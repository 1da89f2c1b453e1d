//! Media query recursive descent parser.
//!
//! Walks the token slice strictly left to right with one token of
//! lookahead, never backtracking:
//!
//! ```text
//! query_list := query (',' query)*
//! query      := [hack] [not|only] type [hack] ('and' expr)*
//!             | expr ('and' expr)*
//! expr       := '(' feature [':' value] ')'
//! value      := identifier | number [unit] | number '/' number
//! ```
//!
//! Any violation aborts the whole list with [`Error::SyntaxError`].

use crate::{Error, Result};
use super::ast::{Expression, Modifier, Query, QueryList};
use super::lexer::{Token, TokenKind};

/// Parser state — the input, its token slice, and a cursor.
struct Parser<'t> {
    input: &'t str,
    tokens: &'t [Token<'t>],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(input: &'t str, tokens: &'t [Token<'t>]) -> Self {
        Self { input, tokens, pos: 0 }
    }

    fn peek(&self) -> Token<'t> {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> Token<'t> {
        let tok = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token<'t>> {
        if self.at(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'t>> {
        match self.eat(kind) {
            Some(tok) => Ok(tok),
            None => Err(self.error(format!("Expected {what}, got {}", describe(&self.peek())))),
        }
    }

    fn at_clause_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Comma | TokenKind::Eof)
    }

    fn slice(&self, start: usize, end: usize) -> &'t str {
        &self.input[start..end]
    }

    fn error(&self, message: String) -> Error {
        self.error_at(self.peek(), message)
    }

    /// Syntax error at `tok`. The fragment runs from `tok` to the end of
    /// its clause.
    fn error_at(&self, tok: Token<'t>, message: String) -> Error {
        let end = self.tokens
            .iter()
            .find(|t| {
                t.span.start >= tok.span.end
                    && matches!(t.kind, TokenKind::Comma | TokenKind::Eof)
            })
            .map_or(self.input.len(), |t| t.span.start);
        Error::SyntaxError {
            position: tok.span.start,
            fragment: self.slice(tok.span.start, end.max(tok.span.start)).trim_end().to_string(),
            message,
        }
    }
}

fn describe(tok: &Token<'_>) -> String {
    match tok.kind {
        TokenKind::Eof => "end of input".to_string(),
        _ => format!("'{}'", tok.text),
    }
}

/// Parse a complete media query list from tokens.
///
/// `tokens` must come from [`super::lexer::tokenize`] over `input`.
pub fn parse_query_list(input: &str, tokens: &[Token<'_>]) -> Result<QueryList> {
    if tokens.is_empty() {
        return Err(Error::SyntaxError {
            position: 0,
            fragment: String::new(),
            message: "Empty token stream".into(),
        });
    }

    let mut p = Parser::new(input, tokens);
    let mut queries = Vec::new();

    loop {
        let query = parse_query(&mut p)?;
        tracing::trace!(
            media_type = %query.media_type,
            expressions = query.expressions.len(),
            "parsed media query clause"
        );
        queries.push(query);

        if p.eat(TokenKind::Comma).is_none() {
            break;
        }
    }

    if !p.at(TokenKind::Eof) {
        return Err(p.error(format!("Unexpected {} after query list", describe(&p.peek()))));
    }

    Ok(QueryList::new(queries))
}

// ============================================================================
// Clauses
// ============================================================================

/// Media type of a clause that starts with an expression.
const IMPLIED_MEDIA_TYPE: &str = "all";

fn parse_query(p: &mut Parser) -> Result<Query> {
    let mut query = Query::default();

    let pre_hack = p.eat(TokenKind::Hack);
    if let Some(hack) = pre_hack {
        query.pre_type_hack = p.slice(hack.span.start, p.peek().span.start).to_string();
    }

    let keyword = match p.peek_kind() {
        TokenKind::Not => {
            p.advance();
            query.inverse = true;
            true
        }
        TokenKind::Only => {
            p.advance();
            true
        }
        _ => false,
    };

    if let Some(ty) = p.eat(TokenKind::Identifier) {
        query.media_type = ty.text.to_string();
        if let Some(hack) = p.eat(TokenKind::Hack) {
            query.post_type_hack = p.slice(ty.span.end, hack.span.end).to_string();
        }
    } else if pre_hack.is_some() || keyword {
        return Err(p.error(format!("Expected media type, got {}", describe(&p.peek()))));
    } else if p.at(TokenKind::LParen) {
        // Type-less clause: the first expression takes the place of the type.
        query.media_type = IMPLIED_MEDIA_TYPE.to_string();
        query.expressions.push(parse_expression(p)?);
    } else {
        return Err(p.error(format!(
            "Expected media type or '(', got {}",
            describe(&p.peek())
        )));
    }

    while p.eat(TokenKind::And).is_some() {
        query.expressions.push(parse_expression(p)?);
    }

    if !p.at_clause_end() {
        return Err(p.error(format!(
            "Expected 'and', ',' or end of input, got {}",
            describe(&p.peek())
        )));
    }

    Ok(query)
}

// ============================================================================
// Feature expressions
// ============================================================================

fn parse_expression(p: &mut Parser) -> Result<Expression> {
    p.expect(TokenKind::LParen, "'(' to open a feature expression")?;
    let name = p.expect(TokenKind::Identifier, "feature name")?;
    let (modifier, feature) = split_modifier(name.text);

    let value = if p.eat(TokenKind::Colon).is_some() {
        Some(parse_value(p)?)
    } else if let Some(m) = modifier {
        return Err(p.error_at(name, format!("'{m}-' feature '{}' requires a value", name.text)));
    } else {
        None
    };

    p.expect(TokenKind::RParen, "')' to close a feature expression")?;

    Ok(Expression {
        modifier,
        feature: feature.to_string(),
        value,
    })
}

/// `identifier | number [unit] | number '/' number`, each optionally
/// followed by a hack fragment. Returned as the verbatim input slice.
fn parse_value(p: &mut Parser) -> Result<String> {
    let first = p.peek();
    let last = match first.kind {
        TokenKind::Identifier => p.advance(),
        TokenKind::Number => {
            let numerator = p.advance();
            if p.eat(TokenKind::Slash).is_some() {
                if has_unit(numerator.text) {
                    return Err(p.error_at(numerator, "Fraction numerator must be a plain number".into()));
                }
                let denominator = p.expect(TokenKind::Number, "denominator after '/'")?;
                if has_unit(denominator.text) {
                    return Err(p.error_at(denominator, "Fraction denominator must be a plain number".into()));
                }
                denominator
            } else {
                numerator
            }
        }
        _ => return Err(p.error(format!("Expected feature value, got {}", describe(&first)))),
    };
    let last = p.eat(TokenKind::Hack).unwrap_or(last);

    Ok(p.slice(first.span.start, last.span.end).to_string())
}

/// Number token text ends in a unit (`2px`, `50%`) rather than a digit.
fn has_unit(number: &str) -> bool {
    number.ends_with(|c: char| c.is_ascii_alphabetic() || c == '%')
}

/// Split a `min-`/`max-` prefix off a feature name.
///
/// A leading modifier is stripped (`min-width` → `width`). A modifier behind
/// a vendor prefix is recognised but the name is kept whole
/// (`-webkit-min-device-pixel-ratio`). The modifier must be a whole word
/// followed by a hyphen and a remainder that is more than hyphens.
fn split_modifier(name: &str) -> (Option<Modifier>, &str) {
    if let Some((modifier, rest)) = leading_modifier(name) {
        return (Some(modifier), rest);
    }

    if let Some(unprefixed) = name.strip_prefix('-') {
        if let Some((vendor, rest)) = unprefixed.split_once('-') {
            if !vendor.is_empty() {
                if let Some((modifier, _)) = leading_modifier(rest) {
                    return (Some(modifier), name);
                }
            }
        }
    }

    (None, name)
}

fn leading_modifier(name: &str) -> Option<(Modifier, &str)> {
    let (word, rest) = name.split_once('-')?;
    if rest.trim_start_matches('-').is_empty() {
        return None;
    }
    Modifier::from_word(word).map(|m| (m, rest))
}
