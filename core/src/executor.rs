//! Execution seam: hands rendered statements to a SQL engine.

use crate::{context::SerializerContext, error::Result, traits::ToSQL, value::Value};

/// Something that runs a statement text with bound values and returns rows.
pub trait Executor {
    type Row;

    fn execute(&mut self, sql: &str, params: &[&Value]) -> Result<Vec<Self::Row>>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    type Row = E::Row;

    fn execute(&mut self, sql: &str, params: &[&Value]) -> Result<Vec<Self::Row>> {
        (**self).execute(sql, params)
    }
}

/// Renders `node` and runs it on `executor`.
///
/// Values rendered as parameters are bound in the order their `?` appear.
pub fn execute<'a, E, T>(
    executor: &mut E,
    node: &'a T,
    ctx: &SerializerContext<'a>,
) -> Result<Vec<E::Row>>
where
    E: Executor + ?Sized,
    T: ToSQL + ?Sized,
{
    let sql = node.to_sql(ctx)?;
    let (text, params) = sql.build();
    crate::sqlweave_trace_query!(&text, params.len());
    executor.execute(&text, &params)
}

#[cfg(feature = "rusqlite")]
impl Executor for rusqlite::Connection {
    type Row = Vec<Value>;

    fn execute(&mut self, sql: &str, params: &[&Value]) -> Result<Vec<Self::Row>> {
        let mut statement = self.prepare(sql)?;
        let column_count = statement.column_count();
        let mut rows = statement.query(rusqlite::params_from_iter(params.iter()))?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for index in 0..column_count {
                values.push(Value::from(row.get_ref(index)?));
            }
            out.push(values);
        }
        Ok(out)
    }
}
