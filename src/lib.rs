use std::any::Any;

/// Orders two values of the same concrete type with a single predicate.
///
/// `a` and `b` are order-equal if `!a.less(b) && !b.less(a)`. Antisymmetry is
/// the only guarantee the trait itself gives; totality and transitivity are
/// the implementing type's burden.
pub trait Lesser: Any {
    /// Returns true if `self` orders before `other`.
    ///
    /// `other` must be the same concrete type as `self`. A mismatch is a
    /// caller defect and panics.
    fn less(&self, other: &dyn Lesser) -> bool;

    fn as_any(&self) -> &dyn Any;
}

/// Orders two values of the same concrete type with a three-way result.
///
/// Expected to agree with [`Lesser`] on types that implement both.
pub trait Comparer: Any {
    /// Returns a negative value if `self` orders before `other`, a positive
    /// value if it orders after it, and zero if the two are order-equal.
    /// Only the sign carries meaning.
    ///
    /// `other` must be the same concrete type as `self`. A mismatch is a
    /// caller defect and panics.
    fn compare(&self, other: &dyn Comparer) -> i32;

    fn as_any(&self) -> &dyn Any;
}

// The test instantiation macros concatenate identifiers at the expansion
// site, which lives in the consumer crate.
#[doc(hidden)]
pub use paste;

pub mod array;
pub mod int;
pub mod patterns;
