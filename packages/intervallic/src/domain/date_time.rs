use {
    super::{
        least::{
            impl_Greatest,
            impl_Least,
        },
        Domain,
        Measure,
    },
    chrono::{
        DateTime,
        NaiveDateTime,
        TimeDelta,
        Utc,
    },
};


impl Domain for NaiveDateTime {}

impl Domain for DateTime<Utc> {}

impl_Least! { NaiveDateTime = NaiveDateTime::MIN }
impl_Greatest! { NaiveDateTime = NaiveDateTime::MAX }

impl_Least! { DateTime<Utc> = DateTime::<Utc>::MIN_UTC }
impl_Greatest! { DateTime<Utc> = DateTime::<Utc>::MAX_UTC }


impl Measure for NaiveDateTime
{
    type Length = TimeDelta;

    #[inline]
    fn length(
        start: &Self,
        end: &Self,
    ) -> Self::Length
    {
        end.signed_duration_since(*start)
    }

    #[inline]
    fn zero_length() -> Self::Length
    {
        TimeDelta::zero()
    }
}

impl Measure for DateTime<Utc>
{
    type Length = TimeDelta;

    #[inline]
    fn length(
        start: &Self,
        end: &Self,
    ) -> Self::Length
    {
        end.signed_duration_since(*start)
    }

    #[inline]
    fn zero_length() -> Self::Length
    {
        TimeDelta::zero()
    }
}
