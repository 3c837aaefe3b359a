//! Regular tables.

use core::marker::PhantomData;

use compact_str::CompactString;
use sqlweave_core::{
    Record, Registry, Result, SQL, Schema, SerializerContext, TableInfo, TableKind, ToSQL, Token,
};

use crate::column::{ColumnDef, Columns};

/// `CREATE TABLE "name" (<column definitions>)[ WITHOUT ROWID]` for record `O`.
#[derive(Debug, Clone)]
pub struct Table<O, C> {
    name: CompactString,
    columns: C,
    without_rowid: bool,
    record: PhantomData<fn() -> O>,
}

/// Creates a table named `name` mapping record `O` to `columns`.
///
/// Every column must belong to the same record:
///
/// ```compile_fail
/// use sqlweave_core::{Record, member};
/// use sqlweave_sqlite::{make_column, make_table};
///
/// struct User {
///     id: i64,
/// }
/// impl Record for User {}
///
/// struct Post {
///     id: i64,
/// }
/// impl Record for Post {}
///
/// let table = make_table(
///     "users",
///     (
///         make_column("id", member!(User::id)),
///         make_column("post_id", member!(Post::id)),
///     ),
/// );
/// ```
pub fn make_table<O: Record, C: Columns<O>>(name: impl Into<CompactString>, columns: C) -> Table<O, C> {
    Table {
        name: name.into(),
        columns,
        without_rowid: false,
        record: PhantomData,
    }
}

impl<O, C> Table<O, C> {
    /// Renders the table as a `WITHOUT ROWID` table.
    pub fn without_rowid(mut self) -> Self {
        self.without_rowid = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn columns(&self) -> &C {
        &self.columns
    }

    pub const fn is_without_rowid(&self) -> bool {
        self.without_rowid
    }
}

impl<O: Record, C: Columns<O>> Table<O, C> {
    /// Finds the definition of the column mapped to `field`.
    pub fn column_by_field(&self, field: &str) -> Option<&dyn ColumnDef> {
        self.columns
            .column_defs()
            .into_iter()
            .find(|column| column.field() == field)
    }

    /// Registry metadata for the table.
    pub fn info(&self) -> TableInfo {
        self.columns
            .column_defs()
            .into_iter()
            .fold(TableInfo::new::<O>(self.name.clone(), TableKind::Table), |table, column| {
                table.with_column(column.info())
            })
    }
}

impl<O: Record, C: Columns<O>> ToSQL for Table<O, C> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let definitions = self
            .columns
            .column_defs()
            .into_iter()
            .map(|column| column.definition_sql(ctx))
            .collect::<Result<Vec<_>>>()?;

        let mut sql = SQL::tokens(&[Token::CREATE, Token::TABLE])
            .append(ctx.ident(self.name.as_str())?)
            .append(SQL::join(definitions, Token::COMMA).parens());
        if self.without_rowid {
            sql.append_mut(SQL::tokens(&[Token::WITHOUT, Token::ROWID]));
        }
        Ok(sql)
    }
}

impl<O: Record, C: Columns<O>> Schema for Table<O, C> {
    fn register(&self, registry: &mut Registry) {
        registry.insert(self.info());
    }
}
