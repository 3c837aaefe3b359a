//! Bindable SQL values.

use compact_str::CompactString;
use core::fmt::Write;

/// A value that can appear in a statement, either inline or as a bound
/// parameter.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub enum Value {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value
    Text(CompactString),
    /// Blob value
    Blob(Box<[u8]>),
    /// NULL value
    #[default]
    Null,
}

impl Value {
    /// Writes the value as an SQL literal.
    ///
    /// Text is wrapped in single quotes with embedded quotes doubled, blobs
    /// render as `X'..'` hex literals.
    pub fn write_literal(&self, buf: &mut impl Write) -> core::fmt::Result {
        match self {
            Value::Integer(i) => write!(buf, "{i}"),
            Value::Real(r) if r.is_nan() => buf.write_str("NULL"),
            // SQLite reads an out-of-range literal as +/-Inf.
            Value::Real(r) if r.is_infinite() => {
                buf.write_str(if *r > 0.0 { "1e999" } else { "-1e999" })
            }
            Value::Real(r) => write!(buf, "{r:?}"),
            Value::Text(text) => {
                buf.write_char('\'')?;
                for part in text.split_inclusive('\'') {
                    buf.write_str(part)?;
                    if part.ends_with('\'') {
                        buf.write_char('\'')?;
                    }
                }
                buf.write_char('\'')
            }
            Value::Blob(bytes) => {
                buf.write_str("X'")?;
                for byte in bytes.iter() {
                    write!(buf, "{byte:02X}")?;
                }
                buf.write_char('\'')
            }
            Value::Null => buf.write_str("NULL"),
        }
    }

    /// Returns the value rendered as an SQL literal.
    pub fn literal(&self) -> String {
        let mut buf = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_literal(&mut buf);
        buf
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Null => Ok(()),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(CompactString::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(CompactString::from(value))
    }
}

impl From<CompactString> for Value {
    fn from(value: CompactString) -> Self {
        Value::Text(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(value.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value.into_boxed_slice())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

//------------------------------------------------------------------------------
// Database Driver Implementations
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, Value as Owned, ValueRef};

        Ok(match self {
            Value::Null => ToSqlOutput::Owned(Owned::Null),
            Value::Integer(i) => ToSqlOutput::Owned(Owned::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Owned(Owned::Real(*r)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

#[cfg(feature = "rusqlite")]
impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;

        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(items) => Value::Text(CompactString::from_utf8_lossy(items)),
            ValueRef::Blob(items) => Value::Blob(items.into()),
        }
    }
}
