use sqlweave_core::{Record, Result, SQL, SerializerContext, ToSQL, ToSQLList, Token};

use super::{Clause, FromTable, GroupByClause, HavingClause, OrderByClause, WhereClause};

/// Builds a SELECT statement.
///
/// `F`, `W`, `Ob`, `G` and `H` are the FROM, WHERE, ORDER BY, GROUP BY and
/// HAVING slots. Clauses render in SQL order whatever order they are set in.
#[derive(Debug, Clone)]
pub struct Select<C, F = (), W = (), Ob = (), G = (), H = ()> {
    columns: C,
    distinct: bool,
    from: F,
    filter: W,
    order_by: Ob,
    group_by: G,
    having: H,
    limit: Option<u64>,
    offset: Option<u64>,
}

/// Starts a SELECT of `columns`: a tuple, array or `Vec` of members and
/// expressions.
pub fn select<C: ToSQLList>(columns: C) -> Select<C> {
    Select {
        columns,
        distinct: false,
        from: (),
        filter: (),
        order_by: (),
        group_by: (),
        having: (),
        limit: None,
        offset: None,
    }
}

impl<C, F, W, Ob, G, H> Select<C, F, W, Ob, G, H> {
    /// `SELECT DISTINCT`
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Selects from the table mapped to `O`.
    pub fn from<O: Record>(self) -> Select<C, FromTable<O>, W, Ob, G, H> {
        Select {
            columns: self.columns,
            distinct: self.distinct,
            from: FromTable::new(),
            filter: self.filter,
            order_by: self.order_by,
            group_by: self.group_by,
            having: self.having,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Sets the WHERE condition.
    pub fn filter<E: ToSQL>(self, condition: E) -> Select<C, F, WhereClause<E>, Ob, G, H> {
        Select {
            columns: self.columns,
            distinct: self.distinct,
            from: self.from,
            filter: WhereClause(condition),
            order_by: self.order_by,
            group_by: self.group_by,
            having: self.having,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Sets the ORDER BY terms.
    pub fn order_by<L: ToSQLList>(self, terms: L) -> Select<C, F, W, OrderByClause<L>, G, H> {
        Select {
            columns: self.columns,
            distinct: self.distinct,
            from: self.from,
            filter: self.filter,
            order_by: OrderByClause(terms),
            group_by: self.group_by,
            having: self.having,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Sets the GROUP BY terms.
    pub fn group_by<L: ToSQLList>(self, terms: L) -> Select<C, F, W, Ob, GroupByClause<L>, H> {
        Select {
            columns: self.columns,
            distinct: self.distinct,
            from: self.from,
            filter: self.filter,
            order_by: self.order_by,
            group_by: GroupByClause(terms),
            having: self.having,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Sets the HAVING condition.
    pub fn having<E: ToSQL>(self, condition: E) -> Select<C, F, W, Ob, G, HavingClause<E>> {
        Select {
            columns: self.columns,
            distinct: self.distinct,
            from: self.from,
            filter: self.filter,
            order_by: self.order_by,
            group_by: self.group_by,
            having: HavingClause(condition),
            limit: self.limit,
            offset: self.offset,
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the OFFSET. Without a limit the statement renders `LIMIT -1`.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl<C, F, W, Ob, G, H> ToSQL for Select<C, F, W, Ob, G, H>
where
    C: ToSQLList,
    F: Clause,
    W: Clause,
    Ob: Clause,
    G: Clause,
    H: Clause,
{
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let inner = ctx.nested();

        let mut sql = SQL::token(Token::SELECT);
        if self.distinct {
            sql.push_mut(Token::DISTINCT);
        }
        sql.append_mut(self.columns.to_sql_list(&inner)?);
        sql.append_mut(self.from.clause_sql(&inner)?);
        sql.append_mut(self.filter.clause_sql(&inner)?);
        sql.append_mut(self.group_by.clause_sql(&inner)?);
        sql.append_mut(self.having.clause_sql(&inner)?);
        sql.append_mut(self.order_by.clause_sql(&inner)?);

        match (self.limit, self.offset) {
            (Some(limit), _) => {
                sql.push_mut(Token::LIMIT);
                sql.append_mut(SQL::number(limit));
            }
            (None, Some(_)) => {
                sql.push_mut(Token::LIMIT);
                sql.append_mut(SQL::raw("-1"));
            }
            (None, None) => {}
        }
        if let Some(offset) = self.offset {
            sql.push_mut(Token::OFFSET);
            sql.append_mut(SQL::number(offset));
        }

        let flags = ctx.flags();
        Ok(sql.parens_if(!flags.top_level && flags.use_parentheses))
    }
}
