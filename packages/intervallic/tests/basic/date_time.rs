use {
    chrono::{
        DateTime,
        NaiveDate,
        NaiveDateTime,
        TimeDelta,
    },
    intervallic::{
        range::{
            DateTimeRange,
            Extra as _,
            NaiveDateTimeRange,
        },
        Interval,
        Range as _,
    },
};


fn day(d: u32) -> NaiveDateTime
{
    NaiveDate::from_ymd_opt(2024, 2, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}


#[test]
fn ranges()
{
    let week = NaiveDateTimeRange::new(day(1), day(8));
    let next = NaiveDateTimeRange::new(day(8), day(15));

    assert!(week.abuts(&next));
    assert!(!week.contains(day(8)));
    assert_eq!(week.length(), TimeDelta::days(7));
    assert_eq!(NaiveDateTimeRange::new(day(8), day(1)).length(), TimeDelta::zero());
    assert_eq!(
        week.gap(&NaiveDateTimeRange::new(day(10), day(11))),
        NaiveDateTimeRange::new(day(8), day(10))
    );
    assert!(NaiveDateTimeRange::starting_at(day(1)).contains(day(29)));

    let epoch = DateTime::from_timestamp(0, 0).unwrap();
    let later = DateTime::from_timestamp(60, 0).unwrap();

    assert_eq!(DateTimeRange::new(epoch, later).length(), TimeDelta::minutes(1));
    assert!(DateTimeRange::ending_at(epoch).abuts(&DateTimeRange::starting_at(epoch)));
}


#[test]
fn intervals()
{
    let week = Interval::bounded(day(1), true, day(8), false).unwrap();
    let day_8 = Interval::bounded(day(8), true, day(8), true).unwrap();

    assert!(week.abuts(&day_8));
    assert!(!week.includes(day(8)));
    assert_eq!(
        week.gap(&Interval::left_bounded(day(10), false).unwrap()),
        Some(Interval::bounded(day(8), true, day(10), true).unwrap())
    );
    assert!(Interval::<NaiveDateTime>::is_empty_bounds(day(2), true, day(1), true));
}
