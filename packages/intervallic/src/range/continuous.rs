use {
    super::Range,
    crate::{
        domain::order,
        Domain,
        Greatest,
        Least,
        Measure,
    },
    core::{
        borrow::Borrow,
        cmp::Ordering,
    },
};


/// A _continuous range_ includes all values greater than or equal to its `start` value and
/// strictly less than its `end` value, `[start, end)`.
///
/// It is _empty_ when `start >= end`.
#[derive(Copy, Clone, Eq, Ord, Hash, PartialEq, PartialOrd, Debug)]
pub struct ContinuousRange<T>
{
    start: T,
    end:   T,
}


impl<T> ContinuousRange<T>
{
    /// Create a range from `start` (included) to `end` (excluded).
    #[must_use]
    #[inline]
    pub const fn new(
        start: T,
        end: T,
    ) -> Self
    {
        Self { start, end }
    }

    /// The start value, the least value that is included (unless empty).
    #[must_use]
    #[inline]
    pub const fn start(&self) -> &T
    {
        &self.start
    }

    /// The end value, which is not included.
    #[must_use]
    #[inline]
    pub const fn end(&self) -> &T
    {
        &self.end
    }

    /// The `start` and `end` values.
    #[must_use]
    #[inline]
    pub fn into_bounds(self) -> (T, T)
    {
        (self.start, self.end)
    }
}

impl<T> ContinuousRange<T>
where T: Measure
{
    /// The distance from `start` to `end`, or zero if empty.
    #[must_use]
    #[inline]
    pub fn length(&self) -> T::Length
    {
        if self.start < self.end {
            T::length(&self.start, &self.end)
        }
        else {
            T::zero_length()
        }
    }
}


impl<T> Range for ContinuousRange<T>
where T: Domain + Least + Greatest
{
    type Point = T;

    #[inline]
    fn new(
        start: T,
        end: T,
    ) -> Self
    {
        Self { start, end }
    }

    #[inline]
    fn start(&self) -> &T
    {
        &self.start
    }

    #[inline]
    fn end(&self) -> &T
    {
        &self.end
    }

    #[inline]
    fn is_empty(&self) -> bool
    {
        // Also empty when incomparable.
        !(self.start < self.end)
    }

    #[inline]
    fn contains(
        &self,
        value: impl Borrow<T>,
    ) -> bool
    {
        let value = value.borrow();
        self.start <= *value && *value < self.end
    }

    #[inline]
    fn overlaps(
        &self,
        range: &Self,
    ) -> bool
    {
        !self.is_empty()
            && !range.is_empty()
            && !(self.end <= range.start || range.end <= self.start)
    }

    #[inline]
    fn gap(
        &self,
        range: &Self,
    ) -> Self
    {
        if self.is_empty() || range.is_empty() || self.overlaps(range) {
            return Self::empty();
        }
        let (lower, higher) = match order(&self.start, &range.start) {
            Ordering::Less | Ordering::Equal => (self, range),
            Ordering::Greater => (range, self),
        };
        Self { start: lower.end.clone(), end: higher.start.clone() }
    }
}


impl<T> From<core::ops::Range<T>> for ContinuousRange<T>
{
    #[inline]
    fn from(value: core::ops::Range<T>) -> Self
    {
        Self { start: value.start, end: value.end }
    }
}

impl<T> From<core::ops::RangeFrom<T>> for ContinuousRange<T>
where T: Domain + Least + Greatest
{
    #[inline]
    fn from(value: core::ops::RangeFrom<T>) -> Self
    {
        Self::starting_at(value.start)
    }
}

impl<T> From<core::ops::RangeTo<T>> for ContinuousRange<T>
where T: Domain + Least + Greatest
{
    #[inline]
    fn from(value: core::ops::RangeTo<T>) -> Self
    {
        Self::ending_at(value.end)
    }
}
