//! Column descriptors.

use compact_str::CompactString;
use smallvec::SmallVec;
use sqlweave_core::{
    ColumnInfo, Member, Record, Result, SQL, SQLChunk, SerializerContext, ToSQL, Token,
};

use crate::{constraints::Constraints, types::SQLiteType};

//------------------------------------------------------------------------------
// Column traits
//------------------------------------------------------------------------------

/// Object-safe view of a column definition.
pub trait ColumnDef {
    /// Column name in SQL.
    fn name(&self) -> &str;

    /// Record field the column maps.
    fn field(&self) -> &'static str;

    fn sql_type(&self) -> &'static str;

    fn not_null(&self) -> bool;

    fn primary_key(&self) -> bool;

    /// `"name" TYPE [constraints...] [NOT NULL]`
    fn definition_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>>;

    /// Registry metadata for the column.
    fn info(&self) -> ColumnInfo {
        ColumnInfo {
            name: self.name().into(),
            field: self.field(),
            sql_type: Some(self.sql_type()),
            not_null: self.not_null(),
            primary_key: self.primary_key(),
        }
    }
}

/// A column of a table mapped to `Self::Record`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a table column",
    label = "expected a column built with `make_column`"
)]
pub trait TableColumn: ColumnDef {
    type Record: Record;
    type Field: SQLiteType;
}

/// An ordered list of column definitions.
pub trait ColumnList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Columns in source order.
    fn column_defs(&self) -> SmallVec<[&dyn ColumnDef; 8]>;
}

/// A column list whose columns all belong to record `O`.
pub trait Columns<O: Record>: ColumnList {}

impl ColumnList for () {
    fn len(&self) -> usize {
        0
    }

    fn column_defs(&self) -> SmallVec<[&dyn ColumnDef; 8]> {
        SmallVec::new()
    }
}

impl<O: Record> Columns<O> for () {}

macro_rules! impl_columns_tuple {
    ($($T:ident),+; $($idx:tt),+) => {
        impl<$($T: ColumnDef),+> ColumnList for ($($T,)+) {
            fn len(&self) -> usize {
                [$($idx),+].len()
            }

            fn column_defs(&self) -> SmallVec<[&dyn ColumnDef; 8]> {
                smallvec::smallvec![$(&self.$idx as &dyn ColumnDef),+]
            }
        }

        impl<O: Record, $($T: TableColumn<Record = O>),+> Columns<O> for ($($T,)+) {}
    };
}

sqlweave_core::with_col_sizes_16!(impl_columns_tuple);
#[cfg(feature = "col32")]
sqlweave_core::with_col_sizes_32!(impl_columns_tuple);

//------------------------------------------------------------------------------
// Column
//------------------------------------------------------------------------------

/// A named column over member `F` of record `O`, with constraints `C`.
#[derive(Debug, Clone)]
pub struct Column<O, F, C = ()> {
    name: CompactString,
    member: Member<O, F>,
    constraints: C,
}

/// Creates a column named `name` over `member`.
///
/// ```compile_fail
/// use sqlweave_core::member;
/// use sqlweave_sqlite::make_column;
///
/// struct NotRegistered {
///     id: i64,
/// }
///
/// // `NotRegistered` does not implement `Record`.
/// let id = make_column("id", member!(NotRegistered::id));
/// ```
pub fn make_column<O: Record, F: SQLiteType>(
    name: impl Into<CompactString>,
    member: Member<O, F>,
) -> Column<O, F> {
    Column {
        name: name.into(),
        member,
        constraints: (),
    }
}

impl<O, F, C> Column<O, F, C> {
    /// Replaces the constraints of the column.
    pub fn with<C2: Constraints>(self, constraints: C2) -> Column<O, F, C2> {
        Column {
            name: self.name,
            member: self.member,
            constraints,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn member(&self) -> Member<O, F> {
        self.member
    }

    pub const fn constraints(&self) -> &C {
        &self.constraints
    }
}

impl<O: Record, F: SQLiteType, C: Constraints> ColumnDef for Column<O, F, C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self) -> &'static str {
        self.member.field()
    }

    fn sql_type(&self) -> &'static str {
        F::SQL_TYPE
    }

    fn not_null(&self) -> bool {
        !F::NULLABLE
    }

    fn primary_key(&self) -> bool {
        self.constraints.has_primary_key()
    }

    fn definition_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let mut sql = ctx
            .ident(self.name.as_str())?
            .push(SQLChunk::raw_static(F::SQL_TYPE));
        sql.append_mut(self.constraints.constraints_sql(ctx)?);
        if !F::NULLABLE {
            sql.append_mut(SQL::tokens(&[Token::NOT, Token::NULL]));
        }
        Ok(sql)
    }
}

impl<O: Record, F: SQLiteType, C: Constraints> TableColumn for Column<O, F, C> {
    type Record = O;
    type Field = F;
}

/// A column renders as its definition.
impl<O: Record, F: SQLiteType, C: Constraints> ToSQL for Column<O, F, C> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        self.definition_sql(ctx)
    }
}
