use {
    crate::{
        Domain,
        Step,
    },
    core::cmp::Ordering,
};


/// Whether an end of an [`Interval`](crate::Interval) is open, closed, or unbounded.
#[derive(Copy, Clone, Eq, Ord, Hash, PartialEq, PartialOrd, Debug)]
#[allow(clippy::exhaustive_enums)]
pub enum EndpointType
{
    /// The end's value is excluded.
    Open,
    /// The end's value is included.
    Closed,
    /// There is no limit in that direction.
    Unbounded,
}


/// One end of an [`Interval`](crate::Interval).
#[derive(Copy, Clone, Eq, Hash, PartialEq, Debug)]
#[allow(clippy::exhaustive_enums)]
pub enum Endpoint<T>
{
    /// There is no limit in this direction.
    Unbounded,
    /// Limited by the value, which is excluded.
    Open(T),
    /// Limited by the value, which is included.
    Closed(T),
}

impl<T> Endpoint<T>
{
    /// An `Open` or `Closed` end at `value`.
    #[must_use]
    #[inline]
    pub fn bound(
        value: T,
        is_closed: bool,
    ) -> Self
    {
        if is_closed { Endpoint::Closed(value) } else { Endpoint::Open(value) }
    }

    /// The limiting value, unless `Unbounded`.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> Option<&T>
    {
        match self {
            Endpoint::Unbounded => None,
            Endpoint::Open(value) | Endpoint::Closed(value) => Some(value),
        }
    }

    /// Which kind of end this is.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> EndpointType
    {
        match self {
            Endpoint::Unbounded => EndpointType::Unbounded,
            Endpoint::Open(_) => EndpointType::Open,
            Endpoint::Closed(_) => EndpointType::Closed,
        }
    }

    /// Same value with the openness swapped, as seen from the other side of the value.  `None`
    /// if `Unbounded`.
    pub(super) fn flipped(self) -> Option<Self>
    {
        match self {
            Endpoint::Unbounded => None,
            Endpoint::Open(value) => Some(Endpoint::Closed(value)),
            Endpoint::Closed(value) => Some(Endpoint::Open(value)),
        }
    }

    /// Whether the value, if any, can be ordered at all (e.g. not NaN).
    pub(super) fn is_comparable(&self) -> bool
    where T: PartialOrd
    {
        self.value().map_or(true, |value| value.partial_cmp(value).is_some())
    }

    /// Where this is, as the left end.
    pub(super) const fn as_left(&self) -> Cut<'_, T>
    {
        match self {
            Endpoint::Unbounded => Cut::Below,
            Endpoint::Closed(value) => Cut::Before(value),
            Endpoint::Open(value) => Cut::After(value),
        }
    }

    /// Where this is, as the right end.
    pub(super) const fn as_right(&self) -> Cut<'_, T>
    {
        match self {
            Endpoint::Unbounded => Cut::Above,
            Endpoint::Closed(value) => Cut::After(value),
            Endpoint::Open(value) => Cut::Before(value),
        }
    }
}

impl<T> Endpoint<T>
where T: Domain
{
    /// For discrete domains, make an `Open` left end `Closed` at the next greater value.  `None`
    /// if there is no greater value, because then nothing is to the right.
    pub(super) fn normalized_left(self) -> Option<Self>
    {
        match self {
            Endpoint::Open(value) => match value.successor() {
                Step::Dense => Some(Endpoint::Open(value)),
                Step::Next(next) => Some(Endpoint::Closed(next)),
                Step::Limit => None,
            },
            unchanged @ (Endpoint::Unbounded | Endpoint::Closed(_)) => Some(unchanged),
        }
    }

    /// For discrete domains, make an `Open` right end `Closed` at the next lesser value.  `None`
    /// if there is no lesser value, because then nothing is to the left.
    pub(super) fn normalized_right(self) -> Option<Self>
    {
        match self {
            Endpoint::Open(value) => match value.predecessor() {
                Step::Dense => Some(Endpoint::Open(value)),
                Step::Next(prev) => Some(Endpoint::Closed(prev)),
                Step::Limit => None,
            },
            unchanged @ (Endpoint::Unbounded | Endpoint::Closed(_)) => Some(unchanged),
        }
    }
}


/// A position on the line of values that's never exactly at a value: infinitely far below or
/// above all values, or infinitesimally before or after a value.
///
/// Every end of an interval is at such a position, which gives one order for comparing left ends
/// with left ends, right ends with right ends, left ends with right ends, and ends with values.
#[derive(Debug)]
pub(super) enum Cut<'l, T>
{
    Below,
    Before(&'l T),
    After(&'l T),
    Above,
}

impl<T: PartialOrd> PartialEq for Cut<'_, T>
{
    #[inline]
    fn eq(
        &self,
        other: &Self,
    ) -> bool
    {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<T: PartialOrd> PartialOrd for Cut<'_, T>
{
    #[inline]
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering>
    {
        match (self, other) {
            (Cut::Below, Cut::Below) | (Cut::Above, Cut::Above) => Some(Ordering::Equal),
            (Cut::Below, _) | (_, Cut::Above) => Some(Ordering::Less),
            (_, Cut::Below) | (Cut::Above, _) => Some(Ordering::Greater),
            (Cut::Before(a), Cut::Before(b)) | (Cut::After(a), Cut::After(b)) => a.partial_cmp(b),
            (Cut::Before(a), Cut::After(b)) => a.partial_cmp(b).map(|o| o.then(Ordering::Less)),
            (Cut::After(a), Cut::Before(b)) =>
                a.partial_cmp(b).map(|o| o.then(Ordering::Greater)),
        }
    }
}
