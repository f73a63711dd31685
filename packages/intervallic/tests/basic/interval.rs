use intervallic::{
    ArgumentError,
    Endpoint,
    EndpointType,
    Interval,
};


fn iv(
    left: f64,
    is_left_closed: bool,
    right: f64,
    is_right_closed: bool,
) -> Interval<f64>
{
    Interval::bounded(left, is_left_closed, right, is_right_closed).unwrap()
}


#[test]
fn touching_ends()
{
    let a = iv(-1.0, true, 1.0, true);
    let b = iv(1.0, false, 2.0, true);

    assert!(!a.overlaps(&b));
    assert!(a.abuts(&b));
    assert!(b.abuts(&a));
    assert_eq!(a.gap(&b), None);

    let c = iv(1.0, true, 2.0, true);

    assert!(a.overlaps(&c));
    assert!(!a.abuts(&c));
    assert_eq!(a.intersection(&c), Some(iv(1.0, true, 1.0, true)));

    let d = iv(1.0, false, 2.0, true);
    let e = iv(-1.0, true, 1.0, false);

    assert!(!e.overlaps(&d));
    assert!(!e.abuts(&d));
    assert_eq!(e.gap(&d), Some(iv(1.0, true, 1.0, true)));
}


#[test]
fn accessors()
{
    let i = iv(-1.5, false, 2.0, true);

    assert_eq!(i.left(), Some(&-1.5));
    assert_eq!(i.left_type(), EndpointType::Open);
    assert_eq!(i.right(), Some(&2.0));
    assert_eq!(i.right_type(), EndpointType::Closed);
    assert_eq!(*i.left_endpoint(), Endpoint::Open(-1.5));

    let u = Interval::<f64>::unbounded();

    assert_eq!(u.left(), None);
    assert_eq!(u.right_type(), EndpointType::Unbounded);
    assert_eq!(*u.right_endpoint(), Endpoint::Unbounded);
}


#[test]
fn discrete()
{
    let i = Interval::bounded(0_u64, false, 5, true).unwrap();

    assert_eq!(i, Interval::bounded(1, true, 6, false).unwrap());
    assert_eq!(i.to_string(), "[1,5]");
    assert!(i.abuts(&Interval::bounded(5, false, 9, true).unwrap()));
    assert!(i.abuts(&Interval::bounded(6, true, 9, true).unwrap()));
    assert_eq!(
        i.gap(&Interval::bounded(8, true, 9, true).unwrap()),
        Some(Interval::bounded(6, true, 7, true).unwrap())
    );
    assert_eq!(Interval::bounded(3, false, 4, false), Err(ArgumentError::EmptyInterval));
    assert!(Interval::<u64>::is_empty_bounds(3, false, 4, false));
    assert!(!Interval::<f64>::is_empty_bounds(3.0, false, 4.0, false));
}


#[test]
fn unbounded()
{
    let all = Interval::<i64>::unbounded();
    let up = Interval::left_bounded(0, true).unwrap();
    let down = Interval::right_bounded(0, false).unwrap();

    assert!(all.includes(i64::MIN) && all.includes(i64::MAX));
    assert!(all.includes_interval(&up) && all.includes_interval(&down));
    assert!(!up.includes_interval(&all));
    assert!(up.abuts(&down));
    assert_eq!(up.intersection(&all), Some(up));
    assert!(down < up);
    assert!(all < up);
    assert!(down < all);
    assert_eq!(down.to_string(), "(-∞,-1]");
}


#[cfg(feature = "alloc")]
#[test]
fn combine()
{
    let parts = [
        iv(-5.0, true, -1.0, true),
        iv(-1.0, false, 1.0, false),
        iv(1.0, true, 5.0, false),
    ];

    assert_eq!(Interval::combine(parts), Ok(Some(iv(-5.0, true, 5.0, false))));
    assert_eq!(Interval::is_contiguous(parts), Ok(true));
    assert_eq!(Interval::has_overlap(parts), Ok(false));
    assert_eq!(iv(-5.0, true, 5.0, false).is_partitioned_by(parts), Ok(true));
    assert_eq!(iv(-5.0, true, 5.0, true).is_partitioned_by(parts), Ok(false));
    assert_eq!(
        Interval::combine([iv(0.0, true, 1.0, false), iv(2.0, true, 3.0, false)]),
        Err(ArgumentError::NotContiguous { index: 0 })
    );
}


#[test]
fn display()
{
    assert_eq!(Interval::<f64>::unbounded().to_string(), "(-∞,∞)");
    assert_eq!(iv(-1.0, true, 1.0, true).to_string(), "[-1,1]");
    assert_eq!(iv(-1.0, false, 1.5, false).to_string(), "(-1,1.5)");
    assert_eq!(Interval::left_bounded(0.25, false).unwrap().to_string(), "(0.25,∞)");
}


#[test]
fn ordering()
{
    let mut all = vec![
        Interval::bounded(2, true, 3, true).unwrap(),
        Interval::unbounded(),
        Interval::left_bounded(1, true).unwrap(),
        Interval::bounded(1, true, 3, true).unwrap(),
        Interval::right_bounded(1, true).unwrap(),
        Interval::bounded(1, true, 1, true).unwrap(),
    ];
    all.sort();

    assert_eq!(all, [
        Interval::right_bounded(1, true).unwrap(),
        Interval::unbounded(),
        Interval::bounded(1, true, 1, true).unwrap(),
        Interval::bounded(1, true, 3, true).unwrap(),
        Interval::left_bounded(1, true).unwrap(),
        Interval::bounded(2, true, 3, true).unwrap(),
    ]);
    assert_eq!(all[0].compare_to(None), core::cmp::Ordering::Greater);
}
