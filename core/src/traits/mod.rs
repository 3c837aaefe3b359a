//! Core traits for SQL generation.

mod member;
mod tuple;

pub use member::*;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::{
    context::SerializerContext,
    error::Result,
    sql::{SQL, Token},
    value::Value,
};

/// Marker for record types mapped to a table.
///
/// A record participates in a schema once a table for it is registered.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mapped record type",
    label = "not a record",
    note = "implement `Record` for `{Self}` and register a table for it"
)]
pub trait Record: 'static {
    /// Name used in diagnostics and errors.
    fn record_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Renders a node into an SQL fragment.
///
/// The context is borrowed for the whole render and never changed; nodes pass
/// it (or a context derived from it) to their children.
pub trait ToSQL {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>>;
}

impl<T: ToSQL + ?Sized> ToSQL for &T {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        (**self).to_sql(ctx)
    }
}

impl<T: ToSQL + ?Sized> ToSQL for Box<T> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        (**self).to_sql(ctx)
    }
}

/// An ordered, heterogeneous list of nodes rendered comma separated.
pub trait ToSQLList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders every item in source order.
    fn to_sql_items<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SmallVec<[SQL<'a>; 8]>>;

    /// Renders the items joined by `, `.
    fn to_sql_list<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::join(self.to_sql_items(ctx)?, Token::COMMA))
    }
}

/// Renders `node` to SQL text.
///
/// Pure: rendering the same node with the same context twice yields the same
/// text.
pub fn serialize<'a, T: ToSQL + ?Sized>(node: &'a T, ctx: &SerializerContext<'a>) -> Result<String> {
    let sql = node.to_sql(ctx)?;
    let text = sql.sql();
    crate::sqlweave_trace_render!(core::any::type_name::<T>(), &text);
    Ok(text)
}

/// A bindable value: `?` plus a parameter when the context asks for it,
/// an inline literal otherwise.
#[inline]
pub fn bindable<'a>(ctx: &SerializerContext<'_>, value: impl Into<Value>) -> SQL<'a> {
    if ctx.flags().replace_bindable_with_question {
        SQL::param(value)
    } else {
        SQL::literal(value)
    }
}

macro_rules! impl_bindable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToSQL for $ty {
                #[inline]
                fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
                    Ok(bindable(ctx, self.clone()))
                }
            }
        )+
    };
}

impl_bindable!(
    i8, i16, i32, i64, u8, u16, u32, bool, f32, f64, String, CompactString, Vec<u8>, Value
);

impl ToSQL for str {
    #[inline]
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(bindable(ctx, self))
    }
}

impl<T: Clone + Into<Value>> ToSQL for Option<T> {
    #[inline]
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(bindable(ctx, self.clone()))
    }
}
