//! # sqlweave
//!
//! Typed SQLite statement nodes that serialize to SQL text, plus the
//! compile-time capability detection they are built on.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlweave::sqlite::prelude::*;
//!
//! struct Post {
//!     title: String,
//!     body: String,
//! }
//! impl Record for Post {}
//!
//! # fn main() -> sqlweave::Result<()> {
//! let posts = make_virtual_table::<Post, _>(
//!     "posts",
//!     using_fts5((
//!         make_column("title", member!(Post::title)),
//!         make_column("body", member!(Post::body)),
//!     )),
//! );
//!
//! let registry = Registry::from_schema(&posts);
//! let ctx = SerializerContext::new(&registry);
//!
//! assert_eq!(
//!     serialize(posts.using(), &ctx)?,
//!     r#"USING FTS5("title", "body")"#
//! );
//! assert_eq!(
//!     serialize(&posts, &ctx)?,
//!     r#"CREATE VIRTUAL TABLE "posts" USING FTS5("title", "body")"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature    | Description                                         |
//! |------------|-----------------------------------------------------|
//! | `std`      | Standard library support (default)                  |
//! | `rusqlite` | [`core::Executor`] for `rusqlite::Connection`       |
//! | `tracing`  | Debug events for rendered and executed statements   |
//! | `col32`    | Column and list tuples up to 32 elements            |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for serialization and execution
pub use sqlweave_core::Result;

/// Error type
pub use sqlweave_core::Error;

/// Render a node to SQL text
pub use sqlweave_core::serialize;

/// Build a member accessor: `member!(User::id)`
pub use sqlweave_core::member;

/// Capability detection and template-family relations.
///
/// ```rust
/// use sqlweave::polyfill::Operation;
/// use sqlweave::probe;
///
/// struct Len;
/// impl Operation<(String,)> for Len {
///     type Output = usize;
/// }
///
/// assert!(probe!(Len, (String,)).succeeded);
/// assert!(!probe!(Len, (u8,)).succeeded);
/// ```
pub use sqlweave_core::polyfill;

pub use sqlweave_core::{
    is_detected, is_specialization_of, is_template_base_of, probe, template_base,
    template_family,
};

// =============================================================================
// Core module
// =============================================================================

/// Dialect-independent building blocks.
pub mod core {
    /// SQL fragment types
    pub use sqlweave_core::{SQL, SQLChunk, Token, Value};

    /// Serialization context and its flags
    pub use sqlweave_core::{Flags, SerializerContext};

    /// Schema registry
    pub use sqlweave_core::{ColumnInfo, Registry, Schema, TableInfo, TableKind};

    /// Node traits
    pub use sqlweave_core::traits::*;

    /// Statement execution
    pub use sqlweave_core::{Executor, execute};
}

// =============================================================================
// SQLite module
// =============================================================================

/// SQLite node kinds.
///
/// ```rust
/// use sqlweave::sqlite::prelude::*;
///
/// struct User {
///     id: i64,
///     name: String,
/// }
/// impl Record for User {}
///
/// let users = make_table(
///     "users",
///     (
///         make_column("id", member!(User::id)).with((primary_key(),)),
///         make_column("name", member!(User::name)),
///     ),
/// );
/// let registry = Registry::from_schema(&users);
/// let ctx = SerializerContext::new(&registry);
///
/// assert_eq!(
///     serialize(&users, &ctx).unwrap(),
///     r#"CREATE TABLE "users" ("id" INTEGER PRIMARY KEY NOT NULL, "name" TEXT NOT NULL)"#
/// );
///
/// let query = select((member!(User::name),))
///     .from::<User>()
///     .filter(eq(member!(User::id), 1));
/// assert_eq!(
///     serialize(&query, &ctx).unwrap(),
///     r#"SELECT "name" FROM "users" WHERE "id" = 1"#
/// );
/// ```
pub mod sqlite {
    pub use sqlweave_sqlite::*;
}

#[cfg(feature = "rusqlite")]
pub use rusqlite;
