//! Media query AST.
//!
//! Pure data produced by the parser. Nothing here is mutated after
//! construction and nothing refers back to the input string.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An ordered list of media queries, one per comma-separated clause.
///
/// Serializes as a bare array of [`Query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryList(Vec<Query>);

impl QueryList {
    pub fn new(queries: Vec<Query>) -> Self {
        Self(queries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Query> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Query> {
        self.0
    }
}

impl Deref for QueryList {
    type Target = [Query];

    fn deref(&self) -> &[Query] {
        &self.0
    }
}

impl IntoIterator for QueryList {
    type Item = Query;
    type IntoIter = std::vec::IntoIter<Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryList {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Query>> for QueryList {
    fn from(queries: Vec<Query>) -> Self {
        Self(queries)
    }
}

impl FromStr for QueryList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        super::parse(s)
    }
}

/// One comma-separated clause: `[not|only] type [and (expr)]*` or
/// `(expr) [and (expr)]*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Clause began with `not`.
    pub inverse: bool,
    /// Hack fragment before the media type, e.g. `\0` in `\0screen`.
    pub pre_type_hack: String,
    /// Media type as written (`screen`, `print`, ...). `all` for type-less
    /// clauses such as `(color)`.
    #[serde(rename = "type")]
    pub media_type: String,
    /// Hack fragment after the media type, e.g. `\9` in `screen\9`.
    pub post_type_hack: String,
    pub expressions: Vec<Expression>,
}

impl Query {
    pub fn has_expressions(&self) -> bool {
        !self.expressions.is_empty()
    }
}

/// A parenthesized feature test: `(min-width: 48em)`, `(color)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    #[serde(with = "modifier_repr")]
    pub modifier: Option<Modifier>,
    pub feature: String,
    /// Right-hand side as written, `None` for a bare test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Expression {
    /// A bare test has no `: value` part.
    pub fn is_bare(&self) -> bool {
        self.value.is_none()
    }
}

/// Range prefix on a feature name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Min,
    Max,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Min => "min",
            Modifier::Max => "max",
        }
    }

    /// Case-insensitive match of a whole word against `min` / `max`.
    pub(crate) fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("min") {
            Some(Modifier::Min)
        } else if word.eq_ignore_ascii_case("max") {
            Some(Modifier::Max)
        } else {
            None
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Option<Modifier>` on the wire: `"min"`, `"max"`, or `""` for none.
mod modifier_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Modifier;

    pub fn serialize<S: Serializer>(modifier: &Option<Modifier>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(modifier.map_or("", Modifier::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Modifier>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Modifier::from_word(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown modifier '{raw}'")))
    }
}
