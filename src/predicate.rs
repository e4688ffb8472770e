//! Predicate adapters.
//!
//! Turns projections and target values into the predicate shapes the
//! partitioning algorithms consume. All adapters return plain closures;
//! nothing here captures mutable state.

/// Lifts a projection `f` into a binary equality predicate.
///
/// The resulting predicate returns `true` iff both arguments project to
/// equal keys: `is_equal_by(f)(a, b) == (f(a) == f(b))`.
#[inline]
pub fn is_equal_by<T, K, F>(f: F) -> impl Fn(&T, &T) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    move |a, b| f(a) == f(b)
}

/// Lifts a target value into a unary equality predicate.
#[inline]
pub fn is_equal_to<T>(v: T) -> impl Fn(&T) -> bool
where
    T: PartialEq,
{
    move |x| *x == v
}

/// Logical negation of a unary predicate.
#[inline]
pub fn logical_not<T, P>(pred: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |x| !pred(x)
}
