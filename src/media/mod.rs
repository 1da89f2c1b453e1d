//! # Media Queries
//!
//! Media query list parser producing a plain AST.
//! Pure functions — no I/O, no state, nothing retained between calls.

pub mod ast;
pub mod lexer;
pub mod parser;

use crate::Result;
use ast::QueryList;

/// Parse a media query list such as `only screen and (min-width: 48em), print`.
///
/// One malformed clause rejects the whole list; no partial result is returned.
pub fn parse(query: &str) -> Result<QueryList> {
    let tokens = lexer::tokenize(query);
    match parser::parse_query_list(query, &tokens) {
        Ok(list) => {
            tracing::debug!(clauses = list.len(), "parsed media query list");
            Ok(list)
        }
        Err(err) => {
            tracing::debug!(position = err.position(), %err, "rejected media query list");
            Err(err)
        }
    }
}
