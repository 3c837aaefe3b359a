//! Mapping of Rust field types to SQLite storage classes.

use compact_str::CompactString;

/// A field type with a SQLite storage class.
///
/// Columns over other field types are rejected when they are declared:
///
/// ```compile_fail
/// use sqlweave_core::{Record, member};
/// use sqlweave_sqlite::make_column;
///
/// struct Counter {
///     hits: u64,
/// }
/// impl Record for Counter {}
///
/// // `u64` does not fit SQLite's signed 64-bit INTEGER.
/// let hits = make_column("hits", member!(Counter::hits));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no SQLite column type",
    label = "unsupported field type",
    note = "supported: integers up to 32 bits unsigned, `i64`, `bool`, floats, `String`, `Vec<u8>` and `Option` of those"
)]
pub trait SQLiteType {
    /// Declared type in a column definition.
    const SQL_TYPE: &'static str;
    /// Whether the column accepts NULL.
    const NULLABLE: bool = false;
}

macro_rules! impl_sqlite_type {
    ($sql:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl SQLiteType for $ty {
                const SQL_TYPE: &'static str = $sql;
            }
        )+
    };
}

impl_sqlite_type!("INTEGER" => i8, i16, i32, i64, u8, u16, u32, bool);
impl_sqlite_type!("REAL" => f32, f64);
impl_sqlite_type!("TEXT" => String, CompactString);
impl_sqlite_type!("BLOB" => Vec<u8>);

impl<T: SQLiteType> SQLiteType for Option<T> {
    const SQL_TYPE: &'static str = T::SQL_TYPE;
    const NULLABLE: bool = true;
}
