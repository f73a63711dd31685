use {
    super::{
        earlier,
        later,
        Range,
    },
    crate::domain::order,
    core::cmp::Ordering,
};
#[cfg(feature = "alloc")]
use crate::{
    collection,
    ArgumentError,
};


impl<R> Extra for R where R: Range {}

/// Additional methods that are automatically implemented for all types that implement
/// [`Range`].
///
/// This trait should not be implemented for other types (and probably cannot ever be, due to our
/// blanket implementation).
///
/// (These aren't part of `Range` because that would allow implementors to override these but we
/// don't want that.)
pub trait Extra: Range
{
    /// Whether this range and `range` are adjacent: both non-empty, not overlapping, and with
    /// nothing in the [gap](Range::gap) between them.  A range never abuts itself.
    #[must_use]
    #[inline]
    fn abuts(
        &self,
        range: &Self,
    ) -> bool
    {
        !self.is_empty()
            && !range.is_empty()
            && !self.overlaps(range)
            && self.gap(range).is_empty()
    }

    /// Ordering by `start` values, and then by `end` values.  Incomparable values are treated as
    /// equal.
    #[must_use]
    #[inline]
    fn compare(
        &self,
        range: &Self,
    ) -> Ordering
    {
        order(self.start(), range.start()).then_with(|| order(self.end(), range.end()))
    }

    /// The range whose `start` value is the later of the `start` values of `self` and `range`,
    /// and whose `end` value is the earlier of their `end` values.  Empty if they don't overlap.
    #[must_use]
    #[inline]
    fn intersection(
        &self,
        range: &Self,
    ) -> Self
    {
        Self::new(later(self.start(), range.start()), earlier(self.end(), range.end()))
    }

    /// The single range spanning the given `ranges`, which must be contiguous.
    ///
    /// Returns [`Range::empty`] when `ranges` has no elements.
    ///
    /// # Errors
    /// If any of `ranges` is `None`, or if, once sorted, any two consecutive ranges don't
    /// [abut](Self::abuts).
    #[cfg(feature = "alloc")]
    #[inline]
    fn combine(
        ranges: impl IntoIterator<Item = impl Into<Option<Self>>>
    ) -> Result<Self, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(ranges, "ranges", Self::compare)?;
        collection::require_contiguous(&sorted, Self::abuts)?;
        Ok(spanning(&sorted))
    }

    /// Whether, once sorted, every two consecutive ranges of `ranges` [abut](Self::abuts).
    ///
    /// # Errors
    /// If any of `ranges` is `None`.
    #[cfg(feature = "alloc")]
    #[inline]
    fn is_contiguous(
        ranges: impl IntoIterator<Item = impl Into<Option<Self>>>
    ) -> Result<bool, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(ranges, "ranges", Self::compare)?;
        Ok(collection::first_non_abutting(&sorted, Self::abuts).is_none())
    }

    /// Whether, once sorted, any two consecutive ranges of `ranges` [overlap](Range::overlaps).
    ///
    /// Only neighbors are compared, and an empty range overlaps nothing, so an empty range sorted
    /// between two overlapping ones hides their overlap.
    ///
    /// # Errors
    /// If any of `ranges` is `None`.
    #[cfg(feature = "alloc")]
    #[inline]
    fn has_overlap(
        ranges: impl IntoIterator<Item = impl Into<Option<Self>>>
    ) -> Result<bool, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(ranges, "ranges", Self::compare)?;
        Ok(collection::any_adjacent_overlap(&sorted, Self::overlaps))
    }

    /// Whether `ranges` is contiguous and [combines](Self::combine) to exactly `self`.
    ///
    /// # Errors
    /// If any of `ranges` is `None`.
    #[cfg(feature = "alloc")]
    #[inline]
    fn is_partitioned_by(
        &self,
        ranges: impl IntoIterator<Item = impl Into<Option<Self>>>,
    ) -> Result<bool, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(ranges, "ranges", Self::compare)?;
        Ok(collection::first_non_abutting(&sorted, Self::abuts).is_none()
            && spanning(&sorted) == *self)
    }
}


/// From the first's `start` to the last's `end`, of already-sorted `ranges`.
#[cfg(feature = "alloc")]
fn spanning<R: Range>(sorted: &[R]) -> R
{
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => R::new(first.start().clone(), last.end().clone()),
        _ => R::empty(),
    }
}
