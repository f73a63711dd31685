use intervallic::{
    range::{
        DoubleRange,
        Extra as _,
        FloatRange,
    },
    ContinuousRange,
    Range as _,
};


#[test]
fn boundaries()
{
    let r = DoubleRange::new(0.0, 10.0);

    assert!(r.overlaps(&DoubleRange::new(9.999, 20.0)));
    assert!(!r.overlaps(&DoubleRange::new(10.0, 20.0)));
    assert!(r.abuts(&DoubleRange::new(10.0, 20.0)));
    assert!(DoubleRange::new(-3.0, 0.0).abuts(&r));
    assert!(r.contains(0.0));
    assert!(!r.contains(10.0));
    assert!(r.contains(&5.0));
}


#[test]
fn contains_range()
{
    let r = FloatRange::new(-1.0, 1.0);

    assert!(r.contains_range(&r));
    assert!(r.contains_range(&FloatRange::new(-0.5, 1.0)));
    assert!(!r.contains_range(&FloatRange::new(-0.5, 1.5)));
    assert!(r.contains_range(&FloatRange::new(7.0, 7.0)));
    assert!(FloatRange::empty().contains_range(&FloatRange::empty()));
}


#[test]
fn unbounded_sides()
{
    let up = DoubleRange::starting_at(0.0);
    let down = DoubleRange::ending_at(0.0);

    assert_eq!(*up.end(), f64::MAX);
    assert_eq!(*down.start(), f64::MIN);
    assert!(up.abuts(&down));
    assert!(!up.overlaps(&down));
    assert!(down.gap(&up).is_empty());
}


#[test]
fn gap_and_intersection()
{
    let a = DoubleRange::new(0.0, 1.0);
    let b = DoubleRange::new(3.0, 4.0);
    let gap = a.gap(&b);

    assert_eq!(gap, DoubleRange::new(1.0, 3.0));
    assert!(a.abuts(&gap) && gap.abuts(&b));
    assert!(a.intersection(&b).is_empty());
    assert_eq!(
        DoubleRange::new(0.0, 3.5).intersection(&b),
        DoubleRange::new(3.0, 3.5)
    );
}


#[cfg(feature = "alloc")]
#[test]
fn collections()
{
    let parts = [
        DoubleRange::new(1.0, 2.0),
        DoubleRange::new(0.0, 1.0),
        DoubleRange::new(2.0, 3.0),
    ];

    assert_eq!(DoubleRange::combine(parts), Ok(DoubleRange::new(0.0, 3.0)));
    assert_eq!(DoubleRange::is_contiguous(parts), Ok(true));
    assert_eq!(DoubleRange::has_overlap(parts), Ok(false));
    assert_eq!(DoubleRange::new(0.0, 3.0).is_partitioned_by(parts), Ok(true));
    assert_eq!(DoubleRange::new(0.0, 4.0).is_partitioned_by(parts), Ok(false));
    assert!(DoubleRange::combine(Vec::<DoubleRange>::new()).unwrap().is_empty());
    assert_eq!(
        DoubleRange::has_overlap([DoubleRange::new(0.0, 1.5), DoubleRange::new(1.0, 2.0)]),
        Ok(true)
    );
}


#[test]
fn generic_over_domain()
{
    let r = ContinuousRange::new(1_u32, 4);

    assert!(r.contains(3_u32));
    assert!(!r.contains(4_u32));
    assert!(r.abuts(&ContinuousRange::new(4, 5)));
}
