use divdiff::interpolation::algorithms::Regime;
use divdiff::interpolation::errors::InterpolationError;
use divdiff::interpolation::point::Point;

type DivDiffResult = Result<(), InterpolationError>;

#[test]
fn single_point_is_coincident() -> DivDiffResult {
    let p = Point::new(1.0, vec![5.0])?;
    assert_eq!(Regime::classify(&[p])?, Regime::Coincident);
    Ok(())
}

#[test]
fn repeated_point_is_coincident() -> DivDiffResult {
    let p = Point::new(0.0, vec![1.0, -1.0, 2.0])?;
    let points = vec![p.clone(), p.clone(), p];
    assert_eq!(Regime::classify(&points)?, Regime::Coincident);
    Ok(())
}

#[test]
fn unequal_points_are_distinct() -> DivDiffResult {
    let points = vec![
        Point::new(0.0, vec![1.0])?,
        Point::new(1.0, vec![2.0])?,
        Point::new(2.0, vec![5.0])?,
    ];
    assert_eq!(Regime::classify(&points)?, Regime::Distinct);
    Ok(())
}

#[test]
fn shared_x_with_different_values_is_distinct() -> DivDiffResult {
    let points = vec![
        Point::new(1.0, vec![2.0])?,
        Point::new(1.0, vec![3.0])?,
    ];
    assert_eq!(Regime::classify(&points)?, Regime::Distinct);
    Ok(())
}

#[test]
fn partially_repeated_is_mixed() -> DivDiffResult {
    let a = Point::new(0.0, vec![1.0, -1.0])?;
    let b = Point::new(1.0, vec![2.0])?;
    let points = vec![a.clone(), b, a];
    assert_eq!(Regime::classify(&points)?, Regime::Mixed);
    Ok(())
}

#[test]
fn empty_is_error() {
    let err = Regime::classify(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyPoints));
}

#[test]
fn display_names() {
    assert_eq!(Regime::Coincident.to_string(), "coincident");
    assert_eq!(Regime::Distinct.to_string(), "distinct");
    assert_eq!(Regime::Mixed.to_string(), "mixed");
}
