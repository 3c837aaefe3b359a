//! Core of sqlweave: capability detection, the SQL fragment model, the
//! serialization context and the schema registry shared by dialect crates.

pub mod context;
pub mod error;
pub mod executor;
pub mod polyfill;
pub mod schema;
pub mod sql;
pub mod tracing;
pub mod traits;
pub mod value;

// Re-export key types and traits
pub use context::{Flags, SerializerContext};
pub use error::{Error, Result};
pub use executor::{Executor, execute};
pub use schema::{ColumnInfo, Registry, Schema, TableInfo, TableKind};
pub use sql::{SQL, SQLChunk, Token};
pub use traits::*;
pub use value::Value;
