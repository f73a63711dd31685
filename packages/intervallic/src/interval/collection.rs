use {
    super::Interval,
    crate::{
        collection,
        ArgumentError,
        Domain,
    },
};


fn compare<T: Domain>(
    a: &Interval<T>,
    b: &Interval<T>,
) -> core::cmp::Ordering
{
    a.compare_to(Some(b))
}


impl<T> Interval<T>
where T: Domain
{
    /// The single interval spanning the given `intervals`, which must be contiguous.  Its left
    /// end is that of the least interval, and its right end is that of the greatest.
    ///
    /// Returns `None` when `intervals` has no elements.
    ///
    /// # Errors
    /// If any of `intervals` is `None`, or if, once sorted, any two consecutive intervals don't
    /// [abut](Self::abuts).
    #[inline]
    pub fn combine(
        intervals: impl IntoIterator<Item = impl Into<Option<Self>>>
    ) -> Result<Option<Self>, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(intervals, "intervals", compare)?;
        collection::require_contiguous(&sorted, Self::abuts)?;
        Ok(spanning(&sorted))
    }

    /// Whether, once sorted, every two consecutive intervals of `intervals`
    /// [abut](Self::abuts).
    ///
    /// # Errors
    /// If any of `intervals` is `None`.
    #[inline]
    pub fn is_contiguous(
        intervals: impl IntoIterator<Item = impl Into<Option<Self>>>
    ) -> Result<bool, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(intervals, "intervals", compare)?;
        Ok(collection::first_non_abutting(&sorted, Self::abuts).is_none())
    }

    /// Whether, once sorted, any two consecutive intervals of `intervals`
    /// [overlap](Self::overlaps).
    ///
    /// # Errors
    /// If any of `intervals` is `None`.
    #[inline]
    pub fn has_overlap(
        intervals: impl IntoIterator<Item = impl Into<Option<Self>>>
    ) -> Result<bool, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(intervals, "intervals", compare)?;
        Ok(collection::any_adjacent_overlap(&sorted, Self::overlaps))
    }

    /// Whether `intervals` is contiguous and [combines](Self::combine) to exactly `self`.
    ///
    /// # Errors
    /// If any of `intervals` is `None`.
    #[inline]
    pub fn is_partitioned_by(
        &self,
        intervals: impl IntoIterator<Item = impl Into<Option<Self>>>,
    ) -> Result<bool, ArgumentError>
    {
        let sorted = collection::sorted::<Self>(intervals, "intervals", compare)?;
        Ok(collection::first_non_abutting(&sorted, Self::abuts).is_none()
            && spanning(&sorted).as_ref() == Some(self))
    }
}


fn spanning<T: Clone>(sorted: &[Interval<T>]) -> Option<Interval<T>>
{
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) =>
            Some(Interval { left: first.left.clone(), right: last.right.clone() }),
        _ => None,
    }
}
