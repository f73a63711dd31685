use {
    super::Range,
    crate::{
        domain::order,
        Discrete,
        Step,
    },
    core::{
        borrow::Borrow,
        cmp::Ordering,
        iter::FusedIterator,
    },
};


/// A _discrete range_ includes all values greater than or equal to its `start` value and less
/// than or equal to its `end` value, `[start, end]`.
///
/// It is _empty_ when `start > end`.  Its values can be enumerated, from `start` to `end`, by
/// [`iter`](Self::iter).
#[derive(Copy, Clone, Eq, Ord, Hash, PartialEq, PartialOrd, Debug)]
pub struct DiscreteRange<T>
{
    start: T,
    end:   T,
}


impl<T> DiscreteRange<T>
{
    /// Create a range from `start` to `end`, both included.
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

    /// The end value, the greatest value that is included (unless empty).
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

impl<T> DiscreteRange<T>
where T: Discrete
{
    /// The amount of values included.
    #[must_use]
    #[inline]
    pub fn length(&self) -> T::Count
    {
        if self.start <= self.end {
            T::count(&self.start, &self.end)
        }
        else {
            T::zero_count()
        }
    }

    /// Iterate, in ascending order, the values included.
    #[inline]
    pub fn iter(&self) -> Values<T>
    {
        Values {
            next: (self.start <= self.end).then(|| self.start.clone()),
            end:  self.end.clone(),
        }
    }
}


impl<T> Range for DiscreteRange<T>
where T: Discrete
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
        !(self.start <= self.end)
    }

    #[inline]
    fn contains(
        &self,
        value: impl Borrow<T>,
    ) -> bool
    {
        let value = value.borrow();
        self.start <= *value && *value <= self.end
    }

    #[inline]
    fn overlaps(
        &self,
        range: &Self,
    ) -> bool
    {
        !self.is_empty()
            && !range.is_empty()
            && self.start <= range.end
            && range.start <= self.end
    }

    /// The values strictly between are from the successor of the lower range's `end` to the
    /// predecessor of the higher range's `start`.
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
        Self { start: lower.end.increment(), end: higher.start.decrement() }
    }
}


/// Iterator of the values of a [`DiscreteRange`].
#[derive(Clone, Debug)]
pub struct Values<T>
{
    next: Option<T>,
    end:  T,
}

impl<T> Iterator for Values<T>
where T: Discrete
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let current = self.next.take()?;
        if current < self.end {
            // Stepping can't reach the limit while still below `end`, but stop if it does.
            if let Step::Next(following) = current.successor() {
                self.next = Some(following);
            }
        }
        Some(current)
    }
}

impl<T> FusedIterator for Values<T> where T: Discrete {}

impl<T> IntoIterator for DiscreteRange<T>
where T: Discrete
{
    type IntoIter = Values<T>;
    type Item = T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<T> IntoIterator for &DiscreteRange<T>
where T: Discrete
{
    type IntoIter = Values<T>;
    type Item = T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}


impl<T> From<core::ops::RangeInclusive<T>> for DiscreteRange<T>
{
    #[inline]
    fn from(value: core::ops::RangeInclusive<T>) -> Self
    {
        let (start, end) = value.into_inner();
        Self { start, end }
    }
}

impl<T> From<core::ops::RangeFrom<T>> for DiscreteRange<T>
where T: Discrete
{
    #[inline]
    fn from(value: core::ops::RangeFrom<T>) -> Self
    {
        Self::starting_at(value.start)
    }
}

impl<T> From<core::ops::RangeToInclusive<T>> for DiscreteRange<T>
where T: Discrete
{
    #[inline]
    fn from(value: core::ops::RangeToInclusive<T>) -> Self
    {
        Self::ending_at(value.end)
    }
}
