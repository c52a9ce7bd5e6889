//! Associative combining operations for parallel reduction.
//!
//! [`Sequence::reduce`](crate::Sequence::reduce) takes an ad-hoc
//! `(combine, identity)` pair. This module provides the lawful alternative:
//! a type implementing [`Monoid`] carries both, and
//! [`Sequence::fold_map`](crate::Sequence::fold_map) and
//! [`Sequence::combine_all`](crate::Sequence::combine_all) use them directly.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))   // associativity
//! M::empty().combine(a) == a == a.combine(M::empty())    // identity
//! ```
//!
//! Commutativity is never required: parallel reduction preserves the order
//! of operands.
//!
//! # Examples
//!
//! ```rust
//! use parseq::algebra::{Max, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Max::<i32>::empty(), Max(i32::MIN));
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! ```

use std::ops::{Add, Mul};

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    fn empty() -> Self;

    /// Combines every value of an iterator left to right, starting from
    /// [`Monoid::empty`].
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(Self::empty(), |accumulator, value| accumulator.combine(value))
    }
}

// =============================================================================
// Wrappers
// =============================================================================

/// Addition, with zero as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Multiplication, with one as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

/// Maximum, with the type's minimum as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

/// Minimum, with the type's maximum as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

macro_rules! impl_wrapper_accessors {
    ($($wrapper:ident),*) => {
        $(
            impl<A> $wrapper<A> {
                /// Unwraps the inner value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }
            }
        )*
    };
}

impl_wrapper_accessors!(Sum, Product, Max, Min);

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

macro_rules! impl_numeric_monoids {
    ($one:literal => $($number:ty),*) => {
        $(
            impl Monoid for Sum<$number> {
                fn empty() -> Self {
                    Self(<$number>::default())
                }
            }

            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_numeric_monoids!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_monoids!(1.0 => f32, f64);

macro_rules! impl_bounded_monoids {
    ($($number:ty),*) => {
        $(
            impl Monoid for Max<$number> {
                fn empty() -> Self {
                    Self(<$number>::MIN)
                }
            }

            impl Monoid for Min<$number> {
                fn empty() -> Self {
                    Self(<$number>::MAX)
                }
            }
        )*
    };
}

impl_bounded_monoids!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

// =============================================================================
// Standard Types
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn numeric_identities() {
        assert_eq!(Sum::<i64>::empty(), Sum(0));
        assert_eq!(Product::<u8>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
        assert_eq!(Min::<u32>::empty(), Min(u32::MAX));
        assert_eq!(Max::<char>::empty(), Max('\0'));
    }

    #[rstest]
    fn option_keeps_present_values() {
        assert_eq!(Some(Sum(1)).combine(None), Some(Sum(1)));
        assert_eq!(None.combine(Some(Sum(2))), Some(Sum(2)));
        assert_eq!(Some(Sum(1)).combine(Some(Sum(2))), Some(Sum(3)));
        assert_eq!(Option::<Sum<i32>>::empty(), None);
    }

    #[rstest]
    fn pair_combines_componentwise() {
        let combined = (Sum(1), Max(4)).combine((Sum(2), Max(3)));
        assert_eq!(combined, (Sum(3), Max(4)));
    }

    #[rstest]
    fn combine_all_preserves_order() {
        let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(String::combine_all(words), "abc");
        assert_eq!(Vec::<i32>::combine_all(Vec::new()), Vec::<i32>::new());
    }

    #[rstest]
    fn wrappers_unwrap() {
        assert_eq!(Sum(5).into_inner(), 5);
        assert_eq!(Min("x").into_inner(), "x");
    }
}
