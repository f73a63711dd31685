use core::fmt::{
    self,
    Display,
    Formatter,
};


/// Errors possibly returned when arguments given to ranges or intervals are invalid.
///
/// These always indicate a mistake by the caller, never a transient condition.
#[derive(Copy, Clone, Eq, Ord, Hash, PartialEq, PartialOrd, Debug)]
#[allow(clippy::exhaustive_enums)]
pub enum ArgumentError
{
    /// The bounds given to construct an [`Interval`](crate::Interval) describe the empty set.
    EmptyInterval,
    /// The (sorted) ranges or intervals at `index` and `index + 1` do not abut.
    NotContiguous
    {
        /// Position, in sorted order, of the first of the two.
        index: usize,
    },
    /// A collection argument contains a `None` element.
    NullElement
    {
        /// Name of the parameter that was given the collection.
        param: &'static str,
        /// Position of the `None` in the collection, as given.
        index: usize,
    },
}

impl Display for ArgumentError
{
    #[inline]
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result
    {
        match self {
            ArgumentError::EmptyInterval => write!(f, "the bounds describe an empty interval"),
            ArgumentError::NotContiguous { index } =>
                write!(f, "not contiguous: elements {index} and {} do not abut", index + 1),
            ArgumentError::NullElement { param, index } =>
                write!(f, "`{param}` contains a `None` element at {index}"),
        }
    }
}


#[cfg(any(feature = "std", feature = "anticipate", rust_lib_feature = "error_in_core"))]
mod standard_error
{
    use super::ArgumentError;

    cfg_if::cfg_if! { if #[cfg(any(feature = "anticipate", rust_lib_feature = "error_in_core"))]
    {
        use core::error::Error;
    }
    else if #[cfg(feature = "std")]
    {
        use std::error::Error;
    } }


    impl Error for ArgumentError {}
}
