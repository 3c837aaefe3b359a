mod chunk;
mod tokens;

use std::borrow::Cow;

pub use chunk::*;
use core::fmt::{Display, Write};
use smallvec::SmallVec;
pub use tokens::*;

use crate::value::Value;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SQL<'a> {
    pub chunks: SmallVec<[SQLChunk<'a>; 8]>,
}

impl<'a> SQL<'a> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with a sequence of tokens, e.g. `PRIMARY KEY`
    #[inline]
    pub fn tokens(tokens: &[Token]) -> Self {
        Self {
            chunks: tokens.iter().copied().map(SQLChunk::Token).collect(),
        }
    }

    /// Creates SQL with a quoted identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single unsigned integer rendered as raw text.
    #[inline]
    pub fn number(value: u64) -> Self {
        Self::raw(value.to_string())
    }

    /// Creates SQL with a value rendered inline
    #[inline]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Literal(value.into())],
        }
    }

    /// Creates SQL with a single bound parameter
    #[inline]
    pub fn param(value: impl Into<Value>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(value.into())],
        }
    }

    /// Creates SQL for a function call: NAME(args)
    #[inline]
    pub fn func(name: &'static str, args: SQL<'a>) -> Self {
        SQL::raw(name).append(args.parens())
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL<'a>>) -> Self {
        self.append_mut(other);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL<'a>>) {
        let other = other.into();

        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        if other.chunks.is_empty() {
            return;
        }

        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk<'a>>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk<'a>>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: Token) -> SQL<'a>
    where
        T: IntoIterator<Item = SQL<'a>>,
    {
        let mut iter = sqls.into_iter();
        let Some(mut result) = iter.next() else {
            return SQL::empty();
        };

        let (lower, _) = iter.size_hint();
        result.chunks.reserve(lower.saturating_mul(2));

        for other in iter {
            result.chunks.push(SQLChunk::Token(separator));
            result.chunks.extend(other.chunks);
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    /// Wrap in parentheses when `wrap` is set
    #[inline]
    pub fn parens_if(self, wrap: bool) -> Self {
        if wrap { self.parens() } else { self }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // ==================== output methods ====================

    /// Returns the SQL string.
    pub fn sql(&self) -> String {
        self.to_string()
    }

    /// Generates the SQL string together with the bound parameters, in the
    /// order their `?` appear.
    pub fn build(&self) -> (String, SmallVec<[&Value; 8]>) {
        (self.sql(), self.params().collect())
    }

    /// Write SQL to a buffer.
    pub fn write_to(&self, buf: &mut impl Write) -> core::fmt::Result {
        for (i, chunk) in self.chunks.iter().enumerate() {
            chunk.write(buf)?;
            if self.needs_space(i) {
                buf.write_char(' ')?;
            }
        }
        Ok(())
    }

    fn needs_space(&self, index: usize) -> bool {
        let Some(next) = self.chunks.get(index + 1) else {
            return false;
        };

        chunk_needs_space(&self.chunks[index], next)
    }

    /// Returns an iterator over references to bound parameter values
    pub fn params(&self) -> impl Iterator<Item = &Value> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Param(value) => Some(value),
            _ => None,
        })
    }
}

/// Canonical spacing logic for SQL chunk rendering.
///
/// Raw text glues to a following `(` so module and function names read as
/// calls (`FTS5(`, `COUNT(`); keywords, identifiers and literals keep the
/// space (`IN (`, `"users" (`).
pub(crate) fn chunk_needs_space(current: &SQLChunk<'_>, next: &SQLChunk<'_>) -> bool {
    // No space if current raw text ends with space
    if let SQLChunk::Raw(text) = current
        && text.ends_with(' ')
    {
        return false;
    }

    // No space if next raw text starts with space
    if let SQLChunk::Raw(text) = next
        && text.starts_with(' ')
    {
        return false;
    }

    match (current, next) {
        // No space before closing/separator punctuation
        (_, SQLChunk::Token(Token::RPAREN | Token::COMMA | Token::SEMI | Token::DOT)) => false,
        // No space after opening punctuation
        (SQLChunk::Token(Token::LPAREN | Token::DOT), _) => false,
        // Space after comma
        (SQLChunk::Token(Token::COMMA), _) => true,
        // Call syntax: NAME(
        (SQLChunk::Raw(_), SQLChunk::Token(Token::LPAREN)) => false,
        // Space after closing paren if next is word-like (e.g., ") FROM")
        (SQLChunk::Token(Token::RPAREN), next) => next.is_word_like(),
        // Space before opening paren if preceded by word-like (e.g., "IN (")
        (current, SQLChunk::Token(Token::LPAREN)) => current.is_word_like(),
        // Space around comparison/arithmetic operators
        (SQLChunk::Token(t), _) if t.is_operator() => true,
        (_, SQLChunk::Token(t)) if t.is_operator() => true,
        // Space between all word-like chunks
        _ => current.is_word_like() && next.is_word_like(),
    }
}

// ==================== trait implementations ====================

impl From<Token> for SQL<'_> {
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl<'a> From<SQLChunk<'a>> for SQL<'a> {
    fn from(value: SQLChunk<'a>) -> Self {
        Self {
            chunks: smallvec::smallvec![value],
        }
    }
}

impl Display for SQL<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_to(f)
    }
}

impl<'a, T> FromIterator<T> for SQL<'a>
where
    SQLChunk<'a>: From<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let chunks = SmallVec::from_iter(iter.into_iter().map(SQLChunk::from));
        Self { chunks }
    }
}

impl<'a> IntoIterator for SQL<'a> {
    type Item = SQLChunk<'a>;
    type IntoIter = smallvec::IntoIter<[SQLChunk<'a>; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
