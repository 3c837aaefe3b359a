use std::borrow::Cow;

use crate::{sql::tokens::Token, value::Value};

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Token` - SQL keywords, punctuation and operators (SELECT, (, =, etc.)
/// - `Ident` - Quoted identifiers ("table_name", "column_name")
/// - `Raw` - Unquoted raw SQL text (module names, type names, numbers)
/// - `Literal` - A value rendered inline
/// - `Param` - A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk<'a> {
    /// SQL keywords and operators: SELECT, FROM, WHERE, =, AND, etc.
    Token(Token),

    /// Quoted identifier for user-provided names.
    /// Renders as: "name" (with quotes, never escaped)
    Ident(Cow<'a, str>),

    /// Raw SQL text (unquoted).
    /// Renders as: text (as-is)
    Raw(Cow<'a, str>),

    /// Inline literal.
    /// Renders as: 42, 'text', X'00', NULL
    Literal(Value),

    /// Bound parameter.
    /// Renders as: ?
    Param(Value),
}

impl<'a> SQLChunk<'a> {
    /// Creates a token chunk - const
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    /// Creates a quoted identifier from a runtime string
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates raw SQL text from a runtime string
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Write chunk content to buffer
    pub(crate) fn write(&self, buf: &mut impl core::fmt::Write) -> core::fmt::Result {
        match self {
            SQLChunk::Token(token) => buf.write_str(token.as_str()),
            SQLChunk::Ident(name) => {
                buf.write_char('"')?;
                buf.write_str(name)?;
                buf.write_char('"')
            }
            SQLChunk::Raw(text) => buf.write_str(text),
            SQLChunk::Literal(value) => value.write_literal(buf),
            SQLChunk::Param(_) => buf.write_char('?'),
        }
    }

    /// Check if this chunk is "word-like" (needs space separation from other word-like chunks)
    #[inline]
    pub(crate) const fn is_word_like(&self) -> bool {
        match self {
            SQLChunk::Token(t) => !t.is_punctuation() && !t.is_operator(),
            SQLChunk::Ident(_) | SQLChunk::Raw(_) | SQLChunk::Literal(_) | SQLChunk::Param(_) => {
                true
            }
        }
    }
}

impl From<Token> for SQLChunk<'_> {
    #[inline]
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}
