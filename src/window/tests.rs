use super::*;

#[test]
fn parse_bare_count() {
    let w = parse_window(7);
    assert_eq!((w.segments(), w.dashes(), w.offset()), (7, &[7][..], 0));
    assert!(!w.is_dashed());

    let w = parse_window(7.9);
    assert_eq!(w.segments(), 7);
    assert_eq!(parse_window(0).segments(), 1);
    assert_eq!(parse_window(-3.).segments(), 1);
    assert_eq!(parse_window(f64::NAN).segments(), 1);
}

#[test]
fn parse_odd_dashes_are_duplicated() {
    let w = parse_window((7, vec![3]));
    assert_eq!((w.segments(), w.dashes(), w.offset()), (7, &[3, 3][..], 0));

    // filtering happens before the parity check
    let w = parse_window((7., vec![1., 2.5, 0.5]));
    assert_eq!(w.dashes(), &[1, 2]);

    let w = parse_window((7., vec![1., 2.5, 0.5, 3.]));
    assert_eq!(w.dashes(), &[1, 2, 3, 1, 2, 3]);
}

#[test]
fn runs_with_huge_dashes() {
    let w = parse_window((10., vec![1e300, 1.]));
    assert_eq!(w.runs(), vec![DashRun::new(0, 10)]);

    let w = parse_window((10., vec![1e300, 1e300], 3.));
    assert_eq!(w.runs(), vec![DashRun::new(0, 10)]);

    // a negative offset lands near the end of the "off" dash
    let w = parse_window((10., vec![1e300, 1e300], -2.));
    assert_eq!(w.runs(), vec![DashRun::new(2, 10)]);
}

#[test]
fn parse_keeps_signed_offset() {
    let w = parse_window((7, vec![2, 3], -1));
    assert_eq!((w.segments(), w.dashes(), w.offset()), (7, &[2, 3][..], -1));

    let w = parse_window((7., vec![2., 3.], -1.5));
    assert_eq!(w.offset(), -2);
}

#[test]
fn parse_empty_dashes_fall_back_to_count() {
    let w = parse_window((7., vec![0., -2., f64::NAN]));
    assert_eq!(w.dashes(), &[7]);
    assert_eq!(w.runs(), vec![DashRun::new(0, 7)]);
}

#[test]
fn parse_is_idempotent() {
    let inputs: Vec<Segments> = vec![
        7.into(),
        (7, vec![3]).into(),
        (7, vec![2, 3], -1).into(),
        (10, vec![12]).into(),
        (10, vec![12], 4).into(),
        (3., vec![0.5, 2.], 9.).into(),
    ];
    for input in inputs {
        let once = parse_window(input);
        let twice = parse_window(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn runs_without_dashing_cover_rail() {
    assert_eq!(parse_window(10).runs(), vec![DashRun::new(0, 10)]);
}

#[test]
fn runs_follow_pattern_and_clip_at_rail_end() {
    let runs = parse_window((10, vec![3, 2])).runs();
    assert_eq!(runs, vec![DashRun::new(0, 3), DashRun::new(5, 8)]);
    let samples: usize = runs.iter().map(|r| r.samples()).sum();
    assert_eq!(samples, 8);

    let runs = parse_window((10, vec![3, 2], 1)).runs();
    assert_eq!(
        runs,
        vec![DashRun::new(0, 2), DashRun::new(4, 7), DashRun::new(9, 10)]
    );
}

#[test]
fn runs_wrap_negative_offset() {
    let runs = parse_window((7, vec![2, 3], -1)).runs();
    assert_eq!(runs, vec![DashRun::new(1, 3), DashRun::new(6, 7)]);

    // an offset of a whole period is the same as none
    assert_eq!(
        parse_window((10, vec![3, 2], 5)).runs(),
        parse_window((10, vec![3, 2])).runs()
    );
}
