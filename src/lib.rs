//! # css-mediaquery — CSS Media Query Parser
//!
//! Parses media query lists, as written in `@media` rules and passed to
//! `matchMedia`-style APIs, into plain data.
//!
//! ## Design Principles
//!
//! 1. **Parser owns nothing**: query string → [`QueryList`] is a pure function
//! 2. **Clean DTOs**: [`Query`] and [`Expression`] are plain, serializable data
//! 3. **Fail whole**: one malformed clause rejects the entire list
//! 4. **No evaluation**: matching a query against a device is the caller's job
//!
//! ## Quick Start
//!
//! ```rust
//! use css_mediaquery::{parse, Modifier};
//!
//! # fn example() -> css_mediaquery::Result<()> {
//! let list = parse("only screen and (min-width: 48em), print")?;
//! assert_eq!(list.len(), 2);
//!
//! let screen = &list[0];
//! assert_eq!(screen.media_type, "screen");
//! assert_eq!(screen.expressions[0].modifier, Some(Modifier::Min));
//! assert_eq!(screen.expressions[0].feature, "width");
//! assert_eq!(screen.expressions[0].value.as_deref(), Some("48em"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Browser Hacks
//!
//! Legacy escape hacks around the media type (`\0screen`, `screen\9`) are
//! tolerated and recorded verbatim in [`Query::pre_type_hack`] and
//! [`Query::post_type_hack`].

// ============================================================================
// Modules
// ============================================================================

pub mod media;

// ============================================================================
// Re-exports
// ============================================================================

pub use media::parse;
pub use media::ast::{Expression, Modifier, Query, QueryList};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not conform to the media query list grammar.
    ///
    /// `fragment` is the unparsed remainder of the offending clause, starting
    /// at `position` (a byte offset into the input).
    #[error("Media query syntax error at position {position}: {message} (near \"{fragment}\")")]
    SyntaxError {
        position: usize,
        fragment: String,
        message: String,
    },
}

impl Error {
    /// Byte offset into the input where matching failed.
    pub fn position(&self) -> usize {
        match self {
            Error::SyntaxError { position, .. } => *position,
        }
    }

    /// The substring of input where matching failed.
    pub fn fragment(&self) -> &str {
        match self {
            Error::SyntaxError { fragment, .. } => fragment,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
