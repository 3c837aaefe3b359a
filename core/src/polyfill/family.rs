use core::marker::PhantomData;

use super::Operation;

/// Marker for a parameterised family of types, e.g. every `Using<M, C>`.
///
/// Declare families with [`template_family!`](crate::template_family).
pub trait Family: 'static {
    const NAME: &'static str;
}

/// Implemented exactly by the instantiations of family `F`.
///
/// `Args` is the argument list of the instantiation, as a tuple.
pub trait Specializes<F: Family> {
    type Args;
}

/// A type holding an instantiation of family `F` as its base slice.
///
/// Every instantiation is its own base.
pub trait TemplateBase<F: Family> {
    type Base: Specializes<F>;

    fn base(&self) -> &Self::Base;

    fn base_mut(&mut self) -> &mut Self::Base;

    fn into_base(self) -> Self::Base
    where
        Self: Sized;
}

/// Views a value as its base instantiation of `F` in the caller's ownership
/// mode: `D` yields `D::Base`, `&D` yields `&D::Base` and `&mut D` yields
/// `&mut D::Base`. The borrowed forms point into the original value.
pub trait AsTemplateBase<F: Family> {
    type Base: Specializes<F>;
    type Output;

    fn as_template_base(self) -> Self::Output;
}

impl<'a, F: Family, D: TemplateBase<F> + ?Sized> AsTemplateBase<F> for &'a D {
    type Base = D::Base;
    type Output = &'a D::Base;

    #[inline]
    fn as_template_base(self) -> Self::Output {
        self.base()
    }
}

impl<'a, F: Family, D: TemplateBase<F> + ?Sized> AsTemplateBase<F> for &'a mut D {
    type Base = D::Base;
    type Output = &'a mut D::Base;

    #[inline]
    fn as_template_base(self) -> Self::Output {
        self.base_mut()
    }
}

/// Free-function form of [`AsTemplateBase::as_template_base`].
///
/// ```ignore
/// let base: &Using<Fts5, _> = as_template_base::<UsingFamily, _>(&node);
/// ```
#[inline]
pub fn as_template_base<F: Family, D: AsTemplateBase<F>>(derived: D) -> D::Output {
    derived.as_template_base()
}

/// Operation formed for `T` iff `T` is an instantiation of `F`; yields its
/// argument list.
pub struct SpecializationOf<F>(PhantomData<F>);

impl<F: Family, T: Specializes<F>> Operation<T> for SpecializationOf<F> {
    type Output = T::Args;
}

/// Operation formed for `D` iff `D` has a base instantiation of `F`; yields
/// that instantiation.
pub struct BaseOf<F>(PhantomData<F>);

impl<F: Family, D: AsTemplateBase<F>> Operation<D> for BaseOf<F> {
    type Output = D::Base;
}

/// `true` iff `T` is literally an instantiation of family `F`.
#[macro_export]
macro_rules! is_specialization_of {
    ($ty:ty, $family:ty $(,)?) => {
        $crate::probe!($crate::polyfill::SpecializationOf<$family>, $ty).succeeded
    };
}

/// `true` iff `D` (owned, `&D` or `&mut D`) has a base instantiation of `F`.
#[macro_export]
macro_rules! is_template_base_of {
    ($family:ty, $derived:ty $(,)?) => {
        $crate::probe!($crate::polyfill::BaseOf<$family>, $derived).succeeded
    };
}

/// Declares family `$family` and makes every `$ty<..>` an instantiation of it.
///
/// `$ty` must not carry bounds on its parameters in its definition.
///
/// ```
/// use sqlweave_core::{is_specialization_of, template_family};
///
/// pub struct Pair<A, B>(A, B);
/// template_family!(pub PairFamily => Pair<A, B>);
///
/// assert!(is_specialization_of!(Pair<u8, String>, PairFamily));
/// assert!(!is_specialization_of!((u8, String), PairFamily));
/// ```
#[macro_export]
macro_rules! template_family {
    ($(#[$meta:meta])* $vis:vis $family:ident => $ty:ident<$($param:ident),* $(,)?>) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $family;

        impl $crate::polyfill::Family for $family {
            const NAME: &'static str = stringify!($ty);
        }

        impl<$($param),*> $crate::polyfill::Specializes<$family> for $ty<$($param),*> {
            type Args = ($($param,)*);
        }

        impl<$($param),*> $crate::polyfill::TemplateBase<$family> for $ty<$($param),*> {
            type Base = Self;

            #[inline]
            fn base(&self) -> &Self {
                self
            }

            #[inline]
            fn base_mut(&mut self) -> &mut Self {
                self
            }

            #[inline]
            fn into_base(self) -> Self {
                self
            }
        }

        impl<$($param),*> $crate::polyfill::AsTemplateBase<$family> for $ty<$($param),*> {
            type Base = Self;
            type Output = Self;

            #[inline]
            fn as_template_base(self) -> Self {
                self
            }
        }
    };
}

/// Declares that `$derived` holds its base instantiation of `$family` in
/// `$field`.
///
/// ```
/// use sqlweave_core::{is_specialization_of, is_template_base_of, template_base, template_family};
///
/// pub struct Pair<A, B>(A, B);
/// template_family!(pub PairFamily => Pair<A, B>);
///
/// pub struct Named<T> {
///     pair: Pair<&'static str, T>,
/// }
/// template_base!(<T> Named<T> => PairFamily: Pair<&'static str, T>, pair);
///
/// assert!(is_template_base_of!(PairFamily, Named<u8>));
/// assert!(is_template_base_of!(PairFamily, &Named<u8>));
/// assert!(!is_specialization_of!(Named<u8>, PairFamily));
/// ```
#[macro_export]
macro_rules! template_base {
    (<$($g:ident),* $(,)?> $derived:ident<$($dg:ident),* $(,)?> => $family:ty : $base:ty, $field:tt) => {
        $crate::template_base!(@impl [$($g),*] $derived<$($dg),*> => $family: $base, $field);
    };
    ($derived:ident => $family:ty : $base:ty, $field:tt) => {
        $crate::template_base!(@impl [] $derived => $family: $base, $field);
    };
    (@impl [$($g:ident),*] $derived:ty => $family:ty : $base:ty, $field:tt) => {
        impl<$($g),*> $crate::polyfill::TemplateBase<$family> for $derived {
            type Base = $base;

            #[inline]
            fn base(&self) -> &$base {
                &self.$field
            }

            #[inline]
            fn base_mut(&mut self) -> &mut $base {
                &mut self.$field
            }

            #[inline]
            fn into_base(self) -> $base {
                self.$field
            }
        }

        impl<$($g),*> $crate::polyfill::AsTemplateBase<$family> for $derived {
            type Base = $base;
            type Output = $base;

            #[inline]
            fn as_template_base(self) -> $base {
                self.$field
            }
        }
    };
}
