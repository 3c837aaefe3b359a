// =============================================================================
// Recursive accumulator macros
// =============================================================================
//
// Each element is listed once; the accumulator generates every prefix arity
// (1-element, 2-element, ..., N-element tuples). Exported so dialect crates
// can generate their own tuple impls.

/// Recursive accumulator for type+index callbacks.
#[doc(hidden)]
#[macro_export]
macro_rules! seq_tuples {
    (@acc $callback:ident [$($aT:ident),*] [$($ai:tt),*]) => {};
    (@acc $callback:ident [$($aT:ident),*] [$($ai:tt),*] ($T:ident, $i:tt) $($rest:tt)*) => {
        $callback!($($aT,)* $T; $($ai,)* $i);
        $crate::seq_tuples!(@acc $callback [$($aT,)* $T] [$($ai,)* $i] $($rest)*);
    };
    (@from $callback:ident [$($aT:ident),*] [$($ai:tt),*]; $($pairs:tt)+) => {
        $crate::seq_tuples!(@acc $callback [$($aT),*] [$($ai),*] $($pairs)+);
    };
    ($callback:ident; $($pairs:tt)+) => {
        $crate::seq_tuples!(@acc $callback [] [] $($pairs)+);
    };
}

/// Calls `$callback!(T0; 0)`, ..., `$callback!(T0, .., T15; 0, .., 15)`.
///
/// Arities 17..=32 come from [`with_col_sizes_32!`](crate::with_col_sizes_32),
/// which callers invoke behind the `col32` feature.
#[doc(hidden)]
#[macro_export]
macro_rules! with_col_sizes_16 {
    ($callback:ident) => {
        $crate::seq_tuples!($callback;
            (T0,0) (T1,1) (T2,2) (T3,3)
            (T4,4) (T5,5) (T6,6) (T7,7)
            (T8,8) (T9,9) (T10,10) (T11,11)
            (T12,12) (T13,13) (T14,14) (T15,15)
        );
    };
}

/// Calls `$callback!` for arities 17..=32.
#[doc(hidden)]
#[macro_export]
macro_rules! with_col_sizes_32 {
    ($callback:ident) => {
        $crate::seq_tuples!(@from $callback
            [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9,T10,T11,T12,T13,T14,T15]
            [0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15];
            (T16,16) (T17,17) (T18,18) (T19,19)
            (T20,20) (T21,21) (T22,22) (T23,23)
            (T24,24) (T25,25) (T26,26) (T27,27)
            (T28,28) (T29,29) (T30,30) (T31,31)
        );
    };
}

// =============================================================================
// ToSQLList impls
// =============================================================================

use smallvec::SmallVec;

use crate::{
    context::SerializerContext,
    error::Result,
    sql::SQL,
    traits::{ToSQL, ToSQLList},
};

impl ToSQLList for () {
    fn len(&self) -> usize {
        0
    }

    fn to_sql_items<'a>(
        &'a self,
        _ctx: &SerializerContext<'a>,
    ) -> Result<SmallVec<[SQL<'a>; 8]>> {
        Ok(SmallVec::new())
    }
}

/// Callback: implements `ToSQLList` for a tuple of the given arity.
macro_rules! impl_list_tuple {
    ($($T:ident),+; $($idx:tt),+) => {
        impl<$($T: ToSQL),+> ToSQLList for ($($T,)+) {
            fn len(&self) -> usize {
                [$($idx),+].len()
            }

            fn to_sql_items<'a>(
                &'a self,
                ctx: &SerializerContext<'a>,
            ) -> Result<SmallVec<[SQL<'a>; 8]>> {
                Ok(smallvec::smallvec![$(self.$idx.to_sql(ctx)?),+])
            }
        }
    };
}

crate::with_col_sizes_16!(impl_list_tuple);
#[cfg(feature = "col32")]
crate::with_col_sizes_32!(impl_list_tuple);

impl<T: ToSQL> ToSQLList for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn to_sql_items<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SmallVec<[SQL<'a>; 8]>> {
        self.iter().map(|item| item.to_sql(ctx)).collect()
    }
}

impl<T: ToSQL, const N: usize> ToSQLList for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn to_sql_items<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SmallVec<[SQL<'a>; 8]>> {
        self.as_slice().to_sql_items(ctx)
    }
}

impl<T: ToSQL> ToSQLList for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn to_sql_items<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SmallVec<[SQL<'a>; 8]>> {
        self.as_slice().to_sql_items(ctx)
    }
}

impl<L: ToSQLList + ?Sized> ToSQLList for &L {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn to_sql_items<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SmallVec<[SQL<'a>; 8]>> {
        (**self).to_sql_items(ctx)
    }
}
