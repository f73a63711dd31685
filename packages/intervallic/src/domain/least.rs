//! The extremes of a domain, which unbounded-looking ranges use as their missing end.

/// A _least_ value, less than or equal to all other values of `Self`.
///
/// [`Default`] can't serve, since it gives e.g. `0` for `i32`.
pub trait Least
{
    /// The value that is less than or equal to all other values of `Self`.
    fn least() -> Self;
}

/// The dual of [`Least`]: a _greatest_ value that is greater than or equal to all other values.
pub trait Greatest
{
    /// The value that is greater than or equal to all other values of `Self`.
    fn greatest() -> Self;
}


macro_rules! impl_Least {
    ($ty:ty = $val:expr) => {
        impl $crate::domain::Least for $ty
        {
            #[inline]
            fn least() -> Self
            {
                $val
            }
        }
    };
}

macro_rules! impl_Greatest {
    ($ty:ty = $val:expr) => {
        impl $crate::domain::Greatest for $ty
        {
            #[inline]
            fn greatest() -> Self
            {
                $val
            }
        }
    };
}
pub(super) use {
    impl_Greatest,
    impl_Least,
};

macro_rules! impl_MIN_MAX {
    ($($ty:ty)*) => { $(
        impl_Least! { $ty = <$ty>::MIN }
        impl_Greatest! { $ty = <$ty>::MAX }
    )* }
}


// For floats, these are the finite extremes, not the infinities.
impl_MIN_MAX! { u8 i8 u16 i16 u32 i32 u64 i64 f32 f64 }
