use sqlweave_core::{Record, Result, SQL, SerializerContext, ToSQL, Token};

use super::{Clause, FromTable, WhereClause};

/// Builds a DELETE statement for the table mapped to `O`.
#[derive(Debug, Clone)]
pub struct Delete<O, W = ()> {
    from: FromTable<O>,
    filter: W,
}

/// Starts a `DELETE FROM` the table mapped to `O`.
pub fn delete<O: Record>() -> Delete<O> {
    Delete {
        from: FromTable::new(),
        filter: (),
    }
}

impl<O, W> Delete<O, W> {
    /// Sets the WHERE condition.
    pub fn filter<E: ToSQL>(self, condition: E) -> Delete<O, WhereClause<E>> {
        Delete {
            from: self.from,
            filter: WhereClause(condition),
        }
    }
}

impl<O: Record, W: Clause> ToSQL for Delete<O, W> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let inner = ctx.nested();
        Ok(SQL::token(Token::DELETE)
            .append(self.from.clause_sql(&inner)?)
            .append(self.filter.clause_sql(&inner)?))
    }
}
