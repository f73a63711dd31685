//! Conversions into `Interval`s from the standard range types and from our [`Range`]s.
//!
//! [`Range`]: crate::Range

use {
    super::{
        Endpoint,
        Interval,
    },
    crate::{
        ArgumentError,
        ContinuousRange,
        DiscreteRange,
        Domain,
    },
    core::ops,
};


impl<T> From<ops::RangeFull> for Interval<T>
{
    #[inline]
    fn from(_: ops::RangeFull) -> Self
    {
        Self::unbounded()
    }
}

impl<T: Domain> TryFrom<ops::Range<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: ops::Range<T>) -> Result<Self, Self::Error>
    {
        Self::bounded(value.start, true, value.end, false)
    }
}

impl<T: Domain> TryFrom<ops::RangeInclusive<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: ops::RangeInclusive<T>) -> Result<Self, Self::Error>
    {
        let (start, end) = value.into_inner();
        Self::bounded(start, true, end, true)
    }
}

impl<T: Domain> TryFrom<ops::RangeFrom<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: ops::RangeFrom<T>) -> Result<Self, Self::Error>
    {
        Self::left_bounded(value.start, true)
    }
}

impl<T: Domain> TryFrom<ops::RangeTo<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: ops::RangeTo<T>) -> Result<Self, Self::Error>
    {
        Self::right_bounded(value.end, false)
    }
}

impl<T: Domain> TryFrom<ops::RangeToInclusive<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: ops::RangeToInclusive<T>) -> Result<Self, Self::Error>
    {
        Self::right_bounded(value.end, true)
    }
}


/// `[start,end)`.  Fails if the range is empty.
impl<T: Domain> TryFrom<ContinuousRange<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: ContinuousRange<T>) -> Result<Self, Self::Error>
    {
        let (start, end) = value.into_bounds();
        Self::from_endpoints(Endpoint::Closed(start), Endpoint::Open(end))
    }
}

/// `[start,end]`.  Fails if the range is empty.
impl<T: Domain> TryFrom<DiscreteRange<T>> for Interval<T>
{
    type Error = ArgumentError;

    #[inline]
    fn try_from(value: DiscreteRange<T>) -> Result<Self, Self::Error>
    {
        let (start, end) = value.into_bounds();
        Self::from_endpoints(Endpoint::Closed(start), Endpoint::Closed(end))
    }
}
