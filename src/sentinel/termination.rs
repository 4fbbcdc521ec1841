//! Type-level termination tags
//!
//! Every sentinel carries a tag saying whether it is guaranteed to be reached
//! before the physical end of the sequence. Scans only accept [`Bounded`]
//! sentinels, so a predicate-only stop condition has to be OR-ed with a real
//! end before it can drive a scan.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Bounded {}
    impl Sealed for super::Unbounded {}
}

/// Marker for the two termination tags.
pub trait Termination: sealed::Sealed {}

/// The sentinel is reached no later than the physical end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounded;

/// The sentinel may never be reached (predicates, `And`, `Not`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Termination for Bounded {}
impl Termination for Unbounded {}

/// Termination of `left OR right`: bounded when either side is.
pub trait Either<Rhs: Termination>: Termination {
    /// Resulting tag.
    type Output: Termination;
}

impl<Rhs: Termination> Either<Rhs> for Bounded {
    type Output = Bounded;
}

impl Either<Bounded> for Unbounded {
    type Output = Bounded;
}

impl Either<Unbounded> for Unbounded {
    type Output = Unbounded;
}
