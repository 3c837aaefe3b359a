//! Virtual tables and the `USING <module>(...)` clause.

use core::marker::PhantomData;

use compact_str::CompactString;
use smallvec::SmallVec;
use sqlweave_core::{
    Record, Registry, Result, SQL, SQLChunk, Schema, SerializerContext, TableInfo, TableKind,
    ToSQL, Token,
    polyfill::{TemplateBase, as_template_base},
    template_base, template_family,
};

use crate::column::{ColumnDef, ColumnList, Columns};

//------------------------------------------------------------------------------
// Modules
//------------------------------------------------------------------------------

/// A virtual table module, rendered verbatim after `USING`.
pub trait Module {
    fn module_name(&self) -> &str;
}

impl<M: Module + ?Sized> Module for &M {
    fn module_name(&self) -> &str {
        (**self).module_name()
    }
}

impl Module for str {
    fn module_name(&self) -> &str {
        self
    }
}

impl Module for String {
    fn module_name(&self) -> &str {
        self
    }
}

impl Module for CompactString {
    fn module_name(&self) -> &str {
        self
    }
}

/// The FTS5 full-text search module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fts5;

impl Module for Fts5 {
    fn module_name(&self) -> &str {
        "FTS5"
    }
}

//------------------------------------------------------------------------------
// USING
//------------------------------------------------------------------------------

/// `USING <module>(<"c1">, .., <"cN">)`
///
/// Columns render by name only, in source order.
#[derive(Debug, Clone)]
pub struct Using<M, C> {
    module: M,
    columns: C,
}

template_family!(
    /// Family of every `Using<M, C>`.
    pub UsingFamily => Using<M, C>
);

/// Creates a `USING` clause for `module` over `columns`.
pub fn using<M: Module, C: ColumnList>(module: M, columns: C) -> Using<M, C> {
    Using { module, columns }
}

impl<M, C> Using<M, C> {
    pub const fn module(&self) -> &M {
        &self.module
    }

    pub const fn columns(&self) -> &C {
        &self.columns
    }
}

impl<M: Module, C: ColumnList> ToSQL for Using<M, C> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let names = self
            .columns
            .column_defs()
            .into_iter()
            .map(|column| ctx.ident(column.name()))
            .collect::<Result<Vec<_>>>()?;

        Ok(SQL::token(Token::USING)
            .push(SQLChunk::raw(self.module.module_name()))
            .append(SQL::join(names, Token::COMMA).parens()))
    }
}

/// A `USING` clause whose columns all belong to record `O`.
///
/// Implemented by every [`Using`] instantiation; [`VirtualTable`] reaches it
/// through the [`UsingFamily`] base of its clause node.
pub trait UsingClause<O: Record>: ToSQL {
    fn column_defs(&self) -> SmallVec<[&dyn ColumnDef; 8]>;
}

impl<O: Record, M: Module, C: Columns<O>> UsingClause<O> for Using<M, C> {
    fn column_defs(&self) -> SmallVec<[&dyn ColumnDef; 8]> {
        self.columns.column_defs()
    }
}

/// `USING FTS5(...)`, deriving from `Using<Fts5, C>`.
#[derive(Debug, Clone)]
pub struct UsingFts5<C> {
    base: Using<Fts5, C>,
}

template_base!(<C> UsingFts5<C> => UsingFamily: Using<Fts5, C>, base);

/// Creates a `USING FTS5(...)` clause over `columns`.
///
/// ```
/// use sqlweave_core::{Record, Registry, SerializerContext, member, serialize};
/// use sqlweave_sqlite::{make_column, using_fts5};
///
/// struct Post {
///     title: String,
///     body: String,
/// }
/// impl Record for Post {}
///
/// let node = using_fts5((
///     make_column("title", member!(Post::title)),
///     make_column("body", member!(Post::body)),
/// ));
/// let registry = Registry::new();
/// let ctx = SerializerContext::new(&registry);
/// assert_eq!(serialize(&node, &ctx).unwrap(), r#"USING FTS5("title", "body")"#);
/// ```
pub fn using_fts5<C: ColumnList>(columns: C) -> UsingFts5<C> {
    UsingFts5 {
        base: using(Fts5, columns),
    }
}

impl<C: ColumnList> ToSQL for UsingFts5<C> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        as_template_base::<UsingFamily, _>(self).to_sql(ctx)
    }
}

//------------------------------------------------------------------------------
// CREATE VIRTUAL TABLE
//------------------------------------------------------------------------------

/// `CREATE VIRTUAL TABLE "name" USING <module>(...)` for record `O`.
#[derive(Debug, Clone)]
pub struct VirtualTable<O, U> {
    name: CompactString,
    using: U,
    record: PhantomData<fn() -> O>,
}

/// Creates a virtual table named `name` over any node whose template base is a
/// [`Using`] specialization.
///
/// A node without such a base is rejected at compile time:
///
/// ```compile_fail
/// use sqlweave_core::{Record, member};
/// use sqlweave_sqlite::{make_column, make_virtual_table};
///
/// struct Post {
///     title: String,
/// }
/// impl Record for Post {}
///
/// let _ = make_virtual_table::<Post, _>("posts", make_column("title", member!(Post::title)));
/// ```
pub fn make_virtual_table<O, U>(name: impl Into<CompactString>, using: U) -> VirtualTable<O, U>
where
    O: Record,
    U: TemplateBase<UsingFamily>,
    U::Base: UsingClause<O>,
{
    VirtualTable {
        name: name.into(),
        using,
        record: PhantomData,
    }
}

impl<O, U> VirtualTable<O, U> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn using(&self) -> &U {
        &self.using
    }
}

impl<O, U> ToSQL for VirtualTable<O, U>
where
    O: Record,
    U: TemplateBase<UsingFamily>,
    U::Base: UsingClause<O>,
{
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let using = as_template_base::<UsingFamily, _>(&self.using);
        Ok(SQL::tokens(&[Token::CREATE, Token::VIRTUAL, Token::TABLE])
            .append(ctx.ident(self.name.as_str())?)
            .append(using.to_sql(ctx)?))
    }
}

impl<O, U> Schema for VirtualTable<O, U>
where
    O: Record,
    U: TemplateBase<UsingFamily>,
    U::Base: UsingClause<O>,
{
    fn register(&self, registry: &mut Registry) {
        let using = as_template_base::<UsingFamily, _>(&self.using);
        let table = UsingClause::<O>::column_defs(using).into_iter().fold(
            TableInfo::new::<O>(self.name.clone(), TableKind::Virtual),
            |table, column| {
                let mut info = column.info();
                info.sql_type = None;
                table.with_column(info)
            },
        );
        registry.insert(table);
    }
}
