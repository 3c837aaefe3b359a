use core::fmt;

use crate::{
    context::SerializerContext,
    error::Result,
    sql::{SQL, Token},
    traits::{Record, ToSQL},
};

/// Access to field `F` of record `O`: the field name plus an accessor.
///
/// Built with [`member!`](crate::member), which fails to compile when the
/// field does not exist. Renders as a column reference resolved through the
/// registry.
pub struct Member<O, F> {
    field: &'static str,
    accessor: fn(&O) -> &F,
}

impl<O, F> Member<O, F> {
    pub const fn new(field: &'static str, accessor: fn(&O) -> &F) -> Self {
        Self { field, accessor }
    }

    /// Name of the accessed field.
    #[inline]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Reads the field from `object`.
    #[inline]
    pub fn get<'o>(&self, object: &'o O) -> &'o F {
        (self.accessor)(object)
    }
}

impl<O, F> Clone for Member<O, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, F> Copy for Member<O, F> {}

impl<O, F> fmt::Debug for Member<O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("record", &core::any::type_name::<O>())
            .field("field", &self.field)
            .finish()
    }
}

impl<O: Record, F> ToSQL for Member<O, F> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let registry = ctx.registry();
        let column = ctx.ident(registry.column_name::<O>(self.field)?)?;
        if ctx.flags().skip_table_name {
            return Ok(column);
        }
        let table = ctx.ident(registry.table_name::<O>()?)?;
        Ok(table.push(Token::DOT).append(column))
    }
}

/// Builds a [`Member`] for `Record::field`.
///
/// ```
/// use sqlweave_core::member;
///
/// struct User {
///     name: String,
/// }
///
/// let name = member!(User::name);
/// let user = User { name: "ada".into() };
/// assert_eq!(name.field(), "name");
/// assert_eq!(name.get(&user), "ada");
/// ```
///
/// ```compile_fail
/// use sqlweave_core::member;
///
/// struct User {
///     name: String,
/// }
///
/// let email = member!(User::email);
/// ```
#[macro_export]
macro_rules! member {
    ($record:ident :: $field:ident) => {
        $crate::member!(<$record>::$field)
    };
    (<$record:ty> :: $field:ident) => {
        $crate::traits::Member::<$record, _>::new(stringify!($field), |object: &$record| {
            &object.$field
        })
    };
}
