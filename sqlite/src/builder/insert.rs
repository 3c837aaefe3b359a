use core::marker::PhantomData;

use sqlweave_core::{Error, Record, Result, SQL, SerializerContext, ToSQL, ToSQLList, Token};

/// Builds an INSERT statement for the table mapped to `O`.
///
/// `C` is the column list and `V` the row of values, matched by position.
#[derive(Debug, Clone)]
pub struct Insert<O, C = (), V = ()> {
    columns: C,
    values: V,
    record: PhantomData<fn() -> O>,
}

/// Starts an `INSERT INTO` the table mapped to `O`.
///
/// With no columns and no values the statement renders `DEFAULT VALUES`.
pub fn insert<O: Record>() -> Insert<O> {
    Insert {
        columns: (),
        values: (),
        record: PhantomData,
    }
}

impl<O, C, V> Insert<O, C, V> {
    /// Sets the target columns.
    pub fn columns<L: ToSQLList>(self, columns: L) -> Insert<O, L, V> {
        Insert {
            columns,
            values: self.values,
            record: PhantomData,
        }
    }

    /// Sets the row of values, one per column.
    pub fn values<L: ToSQLList>(self, values: L) -> Insert<O, C, L> {
        Insert {
            columns: self.columns,
            values,
            record: PhantomData,
        }
    }
}

impl<O: Record, C: ToSQLList, V: ToSQLList> ToSQL for Insert<O, C, V> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        if self.columns.len() != self.values.len() {
            return Err(Error::Statement(format!(
                "INSERT into `{}` has {} columns but {} values",
                O::record_name(),
                self.columns.len(),
                self.values.len()
            )));
        }

        let inner = ctx.nested();
        let table = ctx.registry().table_name::<O>()?;
        let sql = SQL::tokens(&[Token::INSERT, Token::INTO]).append(ctx.ident(table)?);

        if self.columns.is_empty() {
            return Ok(sql.push(Token::DEFAULT).push(Token::VALUES));
        }

        let columns = self.columns.to_sql_list(&inner.skip_table_name(true))?;
        let values = self.values.to_sql_list(&inner)?;
        Ok(sql
            .append(columns.parens())
            .push(Token::VALUES)
            .append(values.parens()))
    }
}
