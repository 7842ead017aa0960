//! Heterogeneous combining over tuples.
//!
//! The combining analogue of the standard library's tuple [`Hash`] impls:
//! a tuple of hashable values folds element-wise into a seed, in
//! declaration order.

use std::hash::Hash;

use crate::combine::combine;

/// An ordered, non-empty group of hashable values that can be folded
/// into a running seed.
///
/// Implemented for tuples of arity 1 through 12 whose elements all
/// implement [`Hash`].
pub trait CombineMany {
    /// Folds every element into `seed`, left to right.
    fn combine_into(&self, seed: &mut u64);
}

/// Folds every element of `values` into `seed`, left to right.
///
/// A single-element tuple delegates to exactly one [`combine`] call.
#[inline]
pub fn combine_many<T: CombineMany>(seed: &mut u64, values: &T) {
    values.combine_into(seed);
}

macro_rules! impl_combine_many {
    ($($ty:ident . $idx:tt),+) => {
        impl<$($ty: Hash),+> CombineMany for ($($ty,)+) {
            #[inline]
            fn combine_into(&self, seed: &mut u64) {
                $(combine(seed, &self.$idx);)+
            }
        }
    };
}

impl_combine_many!(T0.0);
impl_combine_many!(T0.0, T1.1);
impl_combine_many!(T0.0, T1.1, T2.2);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10);
impl_combine_many!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10, T11.11);
