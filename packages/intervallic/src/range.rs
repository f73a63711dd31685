//! `Range`s are sets of values given by a _start value_ and an _end value_.
//!
//! There are two kinds:
//!
//! - [`ContinuousRange`] includes its start value but not its end value, `[start, end)`, so that
//!   ranges which touch at a point don't both include it.  This suits dense domains like real
//!   numbers and times.
//! - [`DiscreteRange`] includes both, `[start, end]`, and can be enumerated.  This suits domains
//!   like integers.
//!
//! A range whose end is before its start (or, for a continuous range, not after it) is _empty_.
//! Unlike [`Interval`](crate::Interval)s, empty ranges are representable.

use {
    crate::{
        domain::order,
        Domain,
        Greatest,
        Least,
    },
    core::borrow::Borrow,
};


mod continuous;
pub use continuous::ContinuousRange;

mod discrete;
pub use discrete::{
    DiscreteRange,
    Values,
};

pub mod extra;
pub use extra::Extra;


/// A discrete range of `i16`s.
pub type ShortRange = DiscreteRange<i16>;
/// A discrete range of `i32`s.
pub type IntRange = DiscreteRange<i32>;
/// A discrete range of `i64`s.
pub type LongRange = DiscreteRange<i64>;
/// A continuous range of `f32`s.
pub type FloatRange = ContinuousRange<f32>;
/// A continuous range of `f64`s.
pub type DoubleRange = ContinuousRange<f64>;
/// A continuous range of UTC date-times.
#[cfg(feature = "chrono")]
pub type DateTimeRange = ContinuousRange<chrono::DateTime<chrono::Utc>>;
/// A continuous range of date-times without a time-zone.
#[cfg(feature = "chrono")]
pub type NaiveDateTimeRange = ContinuousRange<chrono::NaiveDateTime>;


/// The operations that differ between the kinds of range.
///
/// The operations that are the same for all kinds are in [`Extra`], which is automatically
/// implemented for all types that implement this.
pub trait Range: Clone + PartialEq
{
    /// The type of the start and end values.
    type Point: Domain + Least + Greatest;

    /// Create a range from `start` to `end`.  The result might be empty.
    fn new(
        start: Self::Point,
        end: Self::Point,
    ) -> Self;

    /// The start value.
    fn start(&self) -> &Self::Point;

    /// The end value.
    fn end(&self) -> &Self::Point;

    /// Whether this range includes no values.
    fn is_empty(&self) -> bool;

    /// Whether `value` is included in this range.
    fn contains(
        &self,
        value: impl Borrow<Self::Point>,
    ) -> bool;

    /// Whether this range and `range` include at least one value in common.
    fn overlaps(
        &self,
        range: &Self,
    ) -> bool;

    /// The range of the values strictly between this range and `range`.
    ///
    /// This is empty when they overlap, when either is empty, or when they [abut](Extra::abuts).
    #[must_use]
    fn gap(
        &self,
        range: &Self,
    ) -> Self;

    /// Whether every value included in `range` is included in this range.  An empty `range` is
    /// contained by every range.
    #[inline]
    fn contains_range(
        &self,
        range: &Self,
    ) -> bool
    {
        range.is_empty() || (self.start() <= range.start() && range.end() <= self.end())
    }

    /// The canonical empty range, which starts at the greatest value and ends at the least.
    #[must_use]
    #[inline]
    fn empty() -> Self
    {
        Self::new(Self::Point::greatest(), Self::Point::least())
    }

    /// The range from `start` to the greatest value.
    #[must_use]
    #[inline]
    fn starting_at(start: Self::Point) -> Self
    {
        Self::new(start, Self::Point::greatest())
    }

    /// The range from the least value to `end`.
    #[must_use]
    #[inline]
    fn ending_at(end: Self::Point) -> Self
    {
        Self::new(Self::Point::least(), end)
    }
}


/// The later of two start values (or `a` if incomparable).
fn later<T: PartialOrd + Clone>(
    a: &T,
    b: &T,
) -> T
{
    if order(a, b).is_lt() { b.clone() } else { a.clone() }
}

/// The earlier of two end values (or `a` if incomparable).
fn earlier<T: PartialOrd + Clone>(
    a: &T,
    b: &T,
) -> T
{
    if order(b, a).is_lt() { b.clone() } else { a.clone() }
}
