//! The scalar types that ranges and intervals are made of.
//!
//! A [`Domain`] is any type whose values can be compared.  Some domains are _discrete_: every
//! value has a next greater and a next lesser value (except at the limits of the domain), which
//! is what lets a discrete range be enumerated and lets an open end of an interval be normalized
//! to a closed one.  Other domains are _dense_ (continuous): between any two distinct values
//! there's always another, so there's no "next" value.

use core::cmp::Ordering;


mod least;
pub use least::{
    Greatest,
    Least,
};

#[cfg(feature = "chrono")]
mod date_time;


/// The answer to "what's the next value?", from [`Domain::successor`] and
/// [`Domain::predecessor`].
#[derive(Copy, Clone, Eq, Ord, Hash, PartialEq, PartialOrd, Debug)]
#[allow(clippy::exhaustive_enums)]
pub enum Step<T>
{
    /// The domain is dense, so there is no next value.
    Dense,
    /// The next value.
    Next(T),
    /// The domain is discrete but the value is already at its limit in that direction.
    Limit,
}


/// A type whose values can be the points of ranges and intervals.
///
/// Dense (continuous) domains only need `impl Domain for T {}`.  Discrete domains override
/// [`successor`](Self::successor) and [`predecessor`](Self::predecessor).
pub trait Domain: PartialOrd + Clone
{
    /// The least value that is greater than `self`.
    #[inline]
    fn successor(&self) -> Step<Self>
    {
        Step::Dense
    }

    /// The greatest value that is less than `self`.
    #[inline]
    fn predecessor(&self) -> Step<Self>
    {
        Step::Dense
    }

    /// Whether this domain is discrete, as judged by `self`.
    #[must_use]
    #[inline]
    fn is_discrete(&self) -> bool
    {
        !matches!(self.successor(), Step::Dense)
    }
}


/// A discrete [`Domain`] that has limits, as needed by
/// [`DiscreteRange`](crate::DiscreteRange).
pub trait Discrete: Domain + Least + Greatest
{
    /// Wide enough to count every value of the domain.
    type Count;

    /// The amount of values from `start` to `end` inclusive.  Only called with `start <= end`.
    fn count(
        start: &Self,
        end: &Self,
    ) -> Self::Count;

    /// The count of an empty range.
    fn zero_count() -> Self::Count;

    /// The [`successor`](Domain::successor), or `self` when already at the greatest value.
    #[must_use]
    #[inline]
    fn increment(&self) -> Self
    {
        match self.successor() {
            Step::Next(next) => next,
            Step::Dense | Step::Limit => self.clone(),
        }
    }

    /// The [`predecessor`](Domain::predecessor), or `self` when already at the least value.
    #[must_use]
    #[inline]
    fn decrement(&self) -> Self
    {
        match self.predecessor() {
            Step::Next(prev) => prev,
            Step::Dense | Step::Limit => self.clone(),
        }
    }
}


/// A dense [`Domain`] whose distances can be measured, as needed by
/// [`ContinuousRange::length`](crate::ContinuousRange::length).
pub trait Measure: Domain
{
    /// The type of distances between values.
    type Length;

    /// The distance from `start` to `end`.  Only called with `start < end`.
    fn length(
        start: &Self,
        end: &Self,
    ) -> Self::Length;

    /// The length of an empty range.
    fn zero_length() -> Self::Length;
}


/// Compare two points, where incomparable points (e.g. NaN) are treated as equal, so that
/// sorting is always possible.
#[inline]
pub(crate) fn order<T: PartialOrd>(
    a: &T,
    b: &T,
) -> Ordering
{
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}


macro_rules! impl_Discrete_int {
    ($($ty:ty => $count:ty),* $(,)?) => { $(
        impl Domain for $ty
        {
            #[inline]
            fn successor(&self) -> Step<Self>
            {
                self.checked_add(1).map_or(Step::Limit, Step::Next)
            }

            #[inline]
            fn predecessor(&self) -> Step<Self>
            {
                self.checked_sub(1).map_or(Step::Limit, Step::Next)
            }
        }

        impl Discrete for $ty
        {
            type Count = $count;

            #[inline]
            fn count(
                start: &Self,
                end: &Self,
            ) -> Self::Count
            {
                <$count>::from(end.abs_diff(*start)) + 1
            }

            #[inline]
            fn zero_count() -> Self::Count
            {
                0
            }
        }
    )* };
}

impl_Discrete_int! {
    i8 => u16, i16 => u32, i32 => u64, i64 => u128,
    u8 => u16, u16 => u32, u32 => u64, u64 => u128,
}


macro_rules! impl_Measure_float {
    ($($ty:ty)*) => { $(
        impl Domain for $ty {}

        impl Measure for $ty
        {
            type Length = $ty;

            #[inline]
            fn length(
                start: &Self,
                end: &Self,
            ) -> Self::Length
            {
                end - start
            }

            #[inline]
            fn zero_length() -> Self::Length
            {
                0.0
            }
        }
    )* };
}

impl_Measure_float! { f32 f64 }
