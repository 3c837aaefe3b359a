//! Column constraints.

use sqlweave_core::{Result, SQL, SQLChunk, SerializerContext, ToSQL, Token};

use crate::expr::Order;

//------------------------------------------------------------------------------
// Constraint traits
//------------------------------------------------------------------------------

/// A single column constraint.
pub trait Constraint {
    fn constraint_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>>;

    fn is_primary_key(&self) -> bool {
        false
    }
}

/// An ordered set of constraints: `()` or a tuple of constraints.
pub trait Constraints {
    /// Constraints rendered space separated, in source order.
    fn constraints_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>>;

    fn has_primary_key(&self) -> bool;
}

impl Constraints for () {
    fn constraints_sql<'a>(&'a self, _ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::empty())
    }

    fn has_primary_key(&self) -> bool {
        false
    }
}

macro_rules! impl_constraints_tuple {
    ($($T:ident),+; $($idx:tt),+) => {
        impl<$($T: Constraint),+> Constraints for ($($T,)+) {
            fn constraints_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
                let mut sql = SQL::empty();
                $(sql.append_mut(self.$idx.constraint_sql(ctx)?);)+
                Ok(sql)
            }

            fn has_primary_key(&self) -> bool {
                false $(|| self.$idx.is_primary_key())+
            }
        }
    };
}

sqlweave_core::with_col_sizes_16!(impl_constraints_tuple);

/// Context for expressions inside DDL: literals inline, bare column names,
/// no redundant outer parentheses.
fn ddl_context<'a>(ctx: &SerializerContext<'a>) -> SerializerContext<'a> {
    ctx.nested().with(|flags| {
        flags.replace_bindable_with_question = false;
        flags.skip_table_name = true;
        flags.use_parentheses = false;
    })
}

//------------------------------------------------------------------------------
// PRIMARY KEY
//------------------------------------------------------------------------------

/// `PRIMARY KEY [ASC|DESC] [AUTOINCREMENT]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimaryKey {
    order: Option<Order>,
    autoincrement: bool,
}

pub const fn primary_key() -> PrimaryKey {
    PrimaryKey {
        order: None,
        autoincrement: false,
    }
}

impl PrimaryKey {
    pub const fn asc(mut self) -> Self {
        self.order = Some(Order::Asc);
        self
    }

    pub const fn desc(mut self) -> Self {
        self.order = Some(Order::Desc);
        self
    }

    pub const fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }
}

impl Constraint for PrimaryKey {
    fn constraint_sql<'a>(&'a self, _ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let mut sql = SQL::tokens(&[Token::PRIMARY, Token::KEY]);
        if let Some(order) = self.order {
            sql.push_mut(order.token());
        }
        if self.autoincrement {
            sql.push_mut(Token::AUTOINCREMENT);
        }
        Ok(sql)
    }

    fn is_primary_key(&self) -> bool {
        true
    }
}

//------------------------------------------------------------------------------
// UNIQUE
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unique;

pub const fn unique() -> Unique {
    Unique
}

impl Constraint for Unique {
    fn constraint_sql<'a>(&'a self, _ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::token(Token::UNIQUE))
    }
}

//------------------------------------------------------------------------------
// DEFAULT
//------------------------------------------------------------------------------

/// `DEFAULT (value)`. The value is always rendered inline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultValue<V>(pub V);

pub const fn default_value<V: ToSQL>(value: V) -> DefaultValue<V> {
    DefaultValue(value)
}

impl<V: ToSQL> Constraint for DefaultValue<V> {
    fn constraint_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let value = self.0.to_sql(&ddl_context(ctx))?;
        Ok(SQL::token(Token::DEFAULT).append(value.parens()))
    }
}

//------------------------------------------------------------------------------
// CHECK
//------------------------------------------------------------------------------

/// `CHECK (expr)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check<E>(pub E);

pub const fn check<E: ToSQL>(expr: E) -> Check<E> {
    Check(expr)
}

impl<E: ToSQL> Constraint for Check<E> {
    fn constraint_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let expr = self.0.to_sql(&ddl_context(ctx))?;
        Ok(SQL::token(Token::CHECK).append(expr.parens()))
    }
}

//------------------------------------------------------------------------------
// COLLATE
//------------------------------------------------------------------------------

/// Built-in SQLite collating sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collation {
    Binary,
    Nocase,
    Rtrim,
}

impl Collation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Collation::Binary => "BINARY",
            Collation::Nocase => "NOCASE",
            Collation::Rtrim => "RTRIM",
        }
    }
}

/// `COLLATE <collation>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collate(pub Collation);

pub const fn collate(collation: Collation) -> Collate {
    Collate(collation)
}

impl Constraint for Collate {
    fn constraint_sql<'a>(&'a self, _ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::token(Token::COLLATE).push(SQLChunk::raw_static(self.0.as_str())))
    }
}
