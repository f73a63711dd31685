//! `Interval`s are immutable, never-empty sets of values, each of whose ends is open, closed, or
//! unbounded.
//!
//! Over a discrete [`Domain`] (e.g. integers), open ends are normalized to closed ends at
//! construction, by stepping inward to the next value: `(0,5]` becomes `[1,5]`.  So intervals that
//! include the same values are equal and hash the same regardless of how they were expressed.
//!
//! The notation in the docs here is the usual mathematical one: `[` and `]` for closed ends, `(`
//! and `)` for open ends, and `∞` for unbounded ends.

use {
    crate::{
        ArgumentError,
        Domain,
    },
    core::{
        borrow::Borrow,
        cmp::Ordering,
        fmt::{
            self,
            Display,
            Formatter,
        },
    },
};


mod endpoint;
use endpoint::Cut;
pub use endpoint::{
    Endpoint,
    EndpointType,
};

#[cfg(feature = "alloc")]
mod collection;

mod convert;


/// A non-empty set of all the values between a left end and a right end.
///
/// The [`PartialOrd`]ering (and [`Ord`]ering, if `T: Ord`) is that of
/// [`compare_to`](Self::compare_to).
#[derive(Copy, Clone, Eq, Hash, PartialEq, Debug)]
pub struct Interval<T>
{
    left:  Endpoint<T>,
    right: Endpoint<T>,
}


impl<T> Interval<T>
{
    /// The interval of all values, `(-∞,∞)`.
    #[must_use]
    #[inline]
    pub const fn unbounded() -> Self
    {
        Self { left: Endpoint::Unbounded, right: Endpoint::Unbounded }
    }

    /// The value of the left end, unless unbounded.
    #[must_use]
    #[inline]
    pub const fn left(&self) -> Option<&T>
    {
        self.left.value()
    }

    /// The kind of the left end.
    #[must_use]
    #[inline]
    pub const fn left_type(&self) -> EndpointType
    {
        self.left.kind()
    }

    /// The left end.
    #[must_use]
    #[inline]
    pub const fn left_endpoint(&self) -> &Endpoint<T>
    {
        &self.left
    }

    /// The value of the right end, unless unbounded.
    #[must_use]
    #[inline]
    pub const fn right(&self) -> Option<&T>
    {
        self.right.value()
    }

    /// The kind of the right end.
    #[must_use]
    #[inline]
    pub const fn right_type(&self) -> EndpointType
    {
        self.right.kind()
    }

    /// The right end.
    #[must_use]
    #[inline]
    pub const fn right_endpoint(&self) -> &Endpoint<T>
    {
        &self.right
    }

    fn lower(&self) -> Cut<'_, T>
    {
        self.left.as_left()
    }

    fn upper(&self) -> Cut<'_, T>
    {
        self.right.as_right()
    }
}


impl<T> Interval<T>
where T: Domain
{
    /// The interval from `left` to `right`, each end closed or open as requested.
    ///
    /// # Errors
    /// [`ArgumentError::EmptyInterval`] if the bounds describe the empty set.  See
    /// [`is_empty_bounds`](Self::is_empty_bounds).
    #[inline]
    pub fn bounded(
        left: T,
        is_left_closed: bool,
        right: T,
        is_right_closed: bool,
    ) -> Result<Self, ArgumentError>
    {
        Self::from_endpoints(
            Endpoint::bound(left, is_left_closed),
            Endpoint::bound(right, is_right_closed),
        )
    }

    /// The interval of all values from `left`, `[left,∞)` or `(left,∞)`.
    ///
    /// # Errors
    /// [`ArgumentError::EmptyInterval`] if `left` is open at the greatest value of a discrete
    /// domain.
    #[inline]
    pub fn left_bounded(
        left: T,
        is_left_closed: bool,
    ) -> Result<Self, ArgumentError>
    {
        Self::from_endpoints(Endpoint::bound(left, is_left_closed), Endpoint::Unbounded)
    }

    /// The interval of all values up to `right`, `(-∞,right]` or `(-∞,right)`.
    ///
    /// # Errors
    /// [`ArgumentError::EmptyInterval`] if `right` is open at the least value of a discrete
    /// domain.
    #[inline]
    pub fn right_bounded(
        right: T,
        is_right_closed: bool,
    ) -> Result<Self, ArgumentError>
    {
        Self::from_endpoints(Endpoint::Unbounded, Endpoint::bound(right, is_right_closed))
    }

    /// The interval between the given ends.
    ///
    /// # Errors
    /// [`ArgumentError::EmptyInterval`] if the ends describe the empty set.
    #[inline]
    pub fn from_endpoints(
        left: Endpoint<T>,
        right: Endpoint<T>,
    ) -> Result<Self, ArgumentError>
    {
        Self::normalized(left, right).ok_or_else(|| {
            log::debug!("refused to construct an empty interval");
            ArgumentError::EmptyInterval
        })
    }

    /// Whether the bounds, as would be given to [`bounded`](Self::bounded), describe the empty
    /// set: after normalizing open ends of a discrete domain, `left > right`, or `left == right`
    /// and either end is open.  Also if `left` and `right` are incomparable.
    #[must_use]
    #[inline]
    pub fn is_empty_bounds(
        left: T,
        is_left_closed: bool,
        right: T,
        is_right_closed: bool,
    ) -> bool
    {
        Self::normalized(
            Endpoint::bound(left, is_left_closed),
            Endpoint::bound(right, is_right_closed),
        )
        .is_none()
    }

    /// `None` if empty.
    fn normalized(
        left: Endpoint<T>,
        right: Endpoint<T>,
    ) -> Option<Self>
    {
        // An unbounded end orders without looking at the other end's value.
        if !(left.is_comparable() && right.is_comparable()) {
            return None;
        }
        let interval = Self { left: left.normalized_left()?, right: right.normalized_right()? };
        let non_empty = interval.lower() < interval.upper();
        non_empty.then_some(interval)
    }

    /// Whether `value` is included.
    #[must_use]
    #[inline]
    pub fn includes(
        &self,
        value: impl Borrow<T>,
    ) -> bool
    {
        let value = value.borrow();
        self.lower() < Cut::After(value) && Cut::Before(value) < self.upper()
    }

    /// Whether every value of `other` is included in `self`.
    #[must_use]
    #[inline]
    pub fn includes_interval(
        &self,
        other: &Self,
    ) -> bool
    {
        self.lower() <= other.lower() && other.upper() <= self.upper()
    }

    /// Whether `self` and `other` include at least one value in common.
    #[must_use]
    #[inline]
    pub fn overlaps(
        &self,
        other: &Self,
    ) -> bool
    {
        self.lower() < other.upper() && other.lower() < self.upper()
    }

    /// Whether `self` and `other` are adjacent: not overlapping, and with nothing in the
    /// [gap](Self::gap) between them.
    #[must_use]
    #[inline]
    pub fn abuts(
        &self,
        other: &Self,
    ) -> bool
    {
        !self.overlaps(other) && self.gap(other).is_none()
    }

    /// The interval of the values strictly between `self` and `other`.
    ///
    /// This goes from the right end of the lower one to the left end of the higher one, with the
    /// openness of each flipped.  `None` if they overlap or if they abut.
    #[must_use]
    #[inline]
    pub fn gap(
        &self,
        other: &Self,
    ) -> Option<Self>
    {
        if self.overlaps(other) {
            return None;
        }
        let (lower, higher) = match self.compare_to(Some(other)) {
            Ordering::Less | Ordering::Equal => (self, other),
            Ordering::Greater => (other, self),
        };
        Self::normalized(lower.right.clone().flipped()?, higher.left.clone().flipped()?)
    }

    /// The interval of the values included in both `self` and `other`.  `None` if they don't
    /// overlap.
    #[must_use]
    #[inline]
    pub fn intersection(
        &self,
        other: &Self,
    ) -> Option<Self>
    {
        self.overlaps(other).then(|| {
            let left = if self.lower() < other.lower() { &other.left } else { &self.left };
            let right = if other.upper() < self.upper() { &other.right } else { &self.right };
            Self { left: left.clone(), right: right.clone() }
        })
    }

    /// Ordering by left ends, and then by right ends.
    ///
    /// For left ends, unbounded is least, and at the same value a closed end is less than an open
    /// end.  For right ends, unbounded is greatest, and at the same value an open end is less than
    /// a closed end.  I.e. when the left ends are the same, the interval whose right end is
    /// included by the other is less.
    ///
    /// `None` for `other` is less than every interval.  Incomparable values are treated as equal.
    #[must_use]
    #[inline]
    pub fn compare_to(
        &self,
        other: Option<&Self>,
    ) -> Ordering
    {
        match other {
            None => Ordering::Greater,
            Some(other) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
        }
    }
}


impl<T> PartialOrd for Interval<T>
where T: Domain
{
    #[inline]
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering>
    {
        match self.lower().partial_cmp(&other.lower())? {
            Ordering::Equal => self.upper().partial_cmp(&other.upper()),
            unequal @ (Ordering::Less | Ordering::Greater) => Some(unequal),
        }
    }
}

impl<T> Ord for Interval<T>
where T: Domain + Ord
{
    #[inline]
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering
    {
        self.compare_to(Some(other))
    }
}


/// Mathematical notation, e.g. `[-1,1)`, `(-∞,3]`, `(-∞,∞)`.
impl<T> Display for Interval<T>
where T: Display
{
    #[inline]
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result
    {
        match &self.left {
            Endpoint::Unbounded => write!(f, "(-∞")?,
            Endpoint::Open(value) => write!(f, "({value}")?,
            Endpoint::Closed(value) => write!(f, "[{value}")?,
        }
        write!(f, ",")?;
        match &self.right {
            Endpoint::Unbounded => write!(f, "∞)"),
            Endpoint::Open(value) => write!(f, "{value})"),
            Endpoint::Closed(value) => write!(f, "{value}]"),
        }
    }
}
