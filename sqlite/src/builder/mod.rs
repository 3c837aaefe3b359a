//! Statement builders.
//!
//! Optional clauses are tracked in the builder's type: `()` for an absent
//! clause, a clause type once it is set.

mod delete;
mod insert;
mod select;
mod update;

pub use delete::*;
pub use insert::*;
pub use select::*;
pub use update::*;

use core::marker::PhantomData;

use sqlweave_core::{Record, Result, SQL, SerializerContext, ToSQL, ToSQLList, Token};

/// A clause slot of a statement builder.
pub trait Clause {
    /// The clause, or nothing when unset.
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>>;
}

impl Clause for () {
    fn clause_sql<'a>(&'a self, _ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::empty())
    }
}

/// `FROM "table"`
#[derive(Debug)]
pub struct FromTable<O>(PhantomData<fn() -> O>);

impl<O> FromTable<O> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<O> Clone for FromTable<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for FromTable<O> {}

impl<O> Default for FromTable<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Record> Clause for FromTable<O> {
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let table = ctx.registry().table_name::<O>()?;
        Ok(SQL::token(Token::FROM).append(ctx.ident(table)?))
    }
}

/// `WHERE expr`
#[derive(Debug, Clone, Copy)]
pub struct WhereClause<E>(pub E);

impl<E: ToSQL> Clause for WhereClause<E> {
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let condition = ctx.nested().use_parentheses(false);
        Ok(SQL::token(Token::WHERE).append(self.0.to_sql(&condition)?))
    }
}

/// `ORDER BY term, ..`
#[derive(Debug, Clone, Copy)]
pub struct OrderByClause<L>(pub L);

impl<L: ToSQLList> Clause for OrderByClause<L> {
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::tokens(&[Token::ORDER, Token::BY]).append(self.0.to_sql_list(&ctx.nested())?))
    }
}

/// `GROUP BY term, ..`
#[derive(Debug, Clone, Copy)]
pub struct GroupByClause<L>(pub L);

impl<L: ToSQLList> Clause for GroupByClause<L> {
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::tokens(&[Token::GROUP, Token::BY]).append(self.0.to_sql_list(&ctx.nested())?))
    }
}

/// `HAVING expr`
#[derive(Debug, Clone, Copy)]
pub struct HavingClause<E>(pub E);

impl<E: ToSQL> Clause for HavingClause<E> {
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let condition = ctx.nested().use_parentheses(false);
        Ok(SQL::token(Token::HAVING).append(self.0.to_sql(&condition)?))
    }
}
