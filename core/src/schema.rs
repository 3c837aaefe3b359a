//! Schema registry: the tables and columns known to a serialization run.

use core::any::TypeId;

use compact_str::CompactString;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    traits::Record,
};

/// Kind of a registered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// A regular `CREATE TABLE` table.
    Table,
    /// A `CREATE VIRTUAL TABLE` table backed by a module.
    Virtual,
}

/// Column metadata as seen by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name in SQL.
    pub name: CompactString,
    /// Field of the record the column is mapped to.
    pub field: &'static str,
    /// Declared SQL type, if any (virtual table columns have none).
    pub sql_type: Option<&'static str>,
    pub not_null: bool,
    pub primary_key: bool,
}

/// Table metadata as seen by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: CompactString,
    pub kind: TableKind,
    /// Type id of the mapped record.
    pub record: TypeId,
    /// Type name of the mapped record, for diagnostics.
    pub record_name: &'static str,
    pub columns: SmallVec<[ColumnInfo; 8]>,
}

impl TableInfo {
    /// Creates table metadata for record `O` without columns.
    pub fn new<O: Record>(name: impl Into<CompactString>, kind: TableKind) -> Self {
        Self {
            name: name.into(),
            kind,
            record: TypeId::of::<O>(),
            record_name: O::record_name(),
            columns: SmallVec::new(),
        }
    }

    /// Adds a column and returns self.
    pub fn with_column(mut self, column: ColumnInfo) -> Self {
        self.columns.push(column);
        self
    }

    /// Finds the column mapped to `field`.
    pub fn column_by_field(&self, field: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// Finds a column by its SQL name.
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Anything that can describe itself to a [`Registry`].
pub trait Schema {
    fn register(&self, registry: &mut Registry);
}

impl<S: Schema + ?Sized> Schema for &S {
    fn register(&self, registry: &mut Registry) {
        (**self).register(registry);
    }
}

impl Schema for () {
    fn register(&self, _registry: &mut Registry) {}
}

macro_rules! impl_schema_tuple {
    ($($T:ident),+; $($idx:tt),+) => {
        impl<$($T: Schema),+> Schema for ($($T,)+) {
            fn register(&self, registry: &mut Registry) {
                $(self.$idx.register(registry);)+
            }
        }
    };
}

crate::with_col_sizes_16!(impl_schema_tuple);
#[cfg(feature = "col32")]
crate::with_col_sizes_32!(impl_schema_tuple);

/// Registry of table descriptors keyed by record type.
///
/// One table per record: registering a second table for the same record
/// replaces the first.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: HashMap<TypeId, TableInfo>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a schema (a table or a tuple of tables).
    pub fn from_schema<S: Schema + ?Sized>(schema: &S) -> Self {
        let mut registry = Self::new();
        schema.register(&mut registry);
        registry
    }

    /// Registers every table of `schema`.
    pub fn register<S: Schema + ?Sized>(&mut self, schema: &S) -> &mut Self {
        schema.register(self);
        self
    }

    /// Inserts table metadata, returning the entry it replaced.
    pub fn insert(&mut self, table: TableInfo) -> Option<TableInfo> {
        self.tables.insert(table.record, table)
    }

    /// Table mapped to record `O`.
    pub fn table<O: 'static>(&self) -> Option<&TableInfo> {
        self.table_by_id(TypeId::of::<O>())
    }

    pub fn table_by_id(&self, record: TypeId) -> Option<&TableInfo> {
        self.tables.get(&record)
    }

    /// Table name mapped to record `O`.
    pub fn table_name<O: Record>(&self) -> Result<&str> {
        self.table::<O>()
            .map(|table| table.name.as_str())
            .ok_or(Error::TableNotFound {
                record: O::record_name(),
            })
    }

    /// Column name mapped to `field` of record `O`.
    pub fn column_name<O: Record>(&self, field: &'static str) -> Result<&str> {
        let table = self.table::<O>().ok_or(Error::TableNotFound {
            record: O::record_name(),
        })?;
        table
            .column_by_field(field)
            .map(|column| column.name.as_str())
            .ok_or(Error::ColumnNotFound {
                record: O::record_name(),
                field,
            })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableInfo> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
