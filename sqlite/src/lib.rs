//! SQLite node kinds for sqlweave.
//!
//! Column and table descriptors, FTS5 virtual tables, expressions and the
//! SELECT, INSERT, UPDATE and DELETE builders. Every node renders through
//! [`sqlweave_core::ToSQL`].

pub mod builder;
pub mod column;
pub mod constraints;
pub mod expr;
pub mod table;
pub mod types;
pub mod virtual_table;

pub use builder::{Assign, Delete, Insert, Select, Update, assign, delete, insert, select, update};
pub use column::{Column, ColumnDef, ColumnList, Columns, TableColumn, make_column};
pub use constraints::{Collation, check, collate, default_value, primary_key, unique};
pub use table::{Table, make_table};
pub use types::SQLiteType;
pub use virtual_table::{
    Fts5, Module, Using, UsingClause, UsingFamily, UsingFts5, VirtualTable, make_virtual_table,
    using, using_fts5,
};

/// Everything needed to declare a schema and build statements.
pub mod prelude {
    pub use crate::{
        builder::{
            Assign, Delete, Insert, Select, Update, assign, delete, insert, select, update,
        },
        column::{Column, ColumnDef, ColumnList, Columns, TableColumn, make_column},
        constraints::{Collation, check, collate, default_value, primary_key, unique},
        expr::*,
        table::{Table, make_table},
        types::SQLiteType,
        virtual_table::{
            Fts5, Module, Using, UsingClause, UsingFamily, UsingFts5, VirtualTable,
            make_virtual_table, using, using_fts5,
        },
    };
    pub use sqlweave_core::{
        Error, Flags, Record, Registry, Result, Schema, SerializerContext, ToSQL, ToSQLList,
        member, serialize,
    };
}
