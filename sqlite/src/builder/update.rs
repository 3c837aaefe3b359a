use core::marker::PhantomData;

use sqlweave_core::{Error, Record, Result, SQL, SerializerContext, ToSQL, ToSQLList, Token};

use super::{Clause, WhereClause};

/// `column = value` inside `SET`.
///
/// The column renders unqualified and the value without outer parentheses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assign<L, R> {
    column: L,
    value: R,
}

pub const fn assign<L: ToSQL, R: ToSQL>(column: L, value: R) -> Assign<L, R> {
    Assign { column, value }
}

impl<L: ToSQL, R: ToSQL> ToSQL for Assign<L, R> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let inner = ctx.nested();
        Ok(self
            .column
            .to_sql(&inner.skip_table_name(true))?
            .push(Token::EQ)
            .append(self.value.to_sql(&inner.use_parentheses(false))?))
    }
}

/// `SET a = x, ..`
#[derive(Debug, Clone, Copy)]
pub struct SetClause<L>(pub L);

impl<L: ToSQLList> Clause for SetClause<L> {
    fn clause_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        if self.0.is_empty() {
            return Err(Error::Statement("UPDATE without assignments".into()));
        }
        Ok(SQL::token(Token::SET).append(self.0.to_sql_list(ctx)?))
    }
}

/// Builds an UPDATE statement for the table mapped to `O`.
///
/// Renders only once [`Update::set`] has been called.
#[derive(Debug, Clone)]
pub struct Update<O, S = (), W = ()> {
    set: S,
    filter: W,
    record: PhantomData<fn() -> O>,
}

/// Starts an `UPDATE` of the table mapped to `O`.
pub fn update<O: Record>() -> Update<O> {
    Update {
        set: (),
        filter: (),
        record: PhantomData,
    }
}

impl<O, S, W> Update<O, S, W> {
    /// Sets the assignments: a tuple, array or `Vec` of [`assign`] nodes.
    pub fn set<L: ToSQLList>(self, assignments: L) -> Update<O, SetClause<L>, W> {
        Update {
            set: SetClause(assignments),
            filter: self.filter,
            record: PhantomData,
        }
    }

    /// Sets the WHERE condition.
    pub fn filter<E: ToSQL>(self, condition: E) -> Update<O, S, WhereClause<E>> {
        Update {
            set: self.set,
            filter: WhereClause(condition),
            record: PhantomData,
        }
    }
}

impl<O: Record, L: ToSQLList, W: Clause> ToSQL for Update<O, SetClause<L>, W> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let inner = ctx.nested();
        let table = ctx.registry().table_name::<O>()?;
        Ok(SQL::token(Token::UPDATE)
            .append(ctx.ident(table)?)
            .append(self.set.clause_sql(&inner)?)
            .append(self.filter.clause_sql(&inner)?))
    }
}
