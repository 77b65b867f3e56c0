use vis_resolver::core::{Domain, RawBounds, parse_bounds};

fn raw(min: Option<&str>, max: Option<&str>) -> RawBounds {
    [min.map(str::to_owned), max.map(str::to_owned)]
}

#[test]
fn missing_values_are_unset() {
    assert_eq!(parse_bounds(None), None);
    assert_eq!(parse_bounds(Some(&raw(None, None))), None);
    assert_eq!(parse_bounds(Some(&raw(Some("1"), None))), None);
    assert_eq!(parse_bounds(Some(&raw(Some(""), Some("10")))), None);
    assert_eq!(parse_bounds(Some(&raw(Some(""), Some("")))), None);
}

#[test]
fn zero_bound_is_treated_as_unset() {
    assert_eq!(parse_bounds(Some(&raw(Some("0"), Some("10")))), None);
    assert_eq!(parse_bounds(Some(&raw(Some("-10"), Some("0")))), None);
    assert_eq!(parse_bounds(Some(&raw(Some("0"), Some("100")))), None);
}

#[test]
fn non_numeric_bound_is_unset() {
    assert_eq!(parse_bounds(Some(&raw(Some("abc"), Some("5")))), None);
    assert_eq!(parse_bounds(Some(&raw(Some("5"), Some("5px")))), None);
}

#[test]
fn numeric_bounds_resolve_to_domain() {
    assert_eq!(
        parse_bounds(Some(&raw(Some("-5"), Some("5")))),
        Some(Domain::new(-5.0, 5.0))
    );
    assert_eq!(
        parse_bounds(Some(&raw(Some("0.25"), Some("2e3")))),
        Some(Domain::new(0.25, 2_000.0))
    );
}

#[test]
fn reversed_bounds_are_kept_as_declared() {
    assert_eq!(
        parse_bounds(Some(&raw(Some("10"), Some("1")))),
        Some(Domain::new(10.0, 1.0))
    );
}
