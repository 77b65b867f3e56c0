use vis_resolver::core::{format_number, format_number_with_affixes};

#[test]
fn boundary_values_use_fixed_point() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(1.0), "1");
    assert_eq!(format_number(-1.0), "-1");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn small_values_keep_at_most_three_decimals() {
    assert_eq!(format_number(0.0324), "0.032");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-0.5), "-0.5");
    assert_eq!(format_number(0.0005), "0.001");
    assert_eq!(format_number(0.0004), "0");
}

#[test]
fn large_values_use_si_prefixes() {
    assert_eq!(format_number(2_452_000.0), "2.45M");
    assert_eq!(format_number(1_200.0), "1.2k");
    assert_eq!(format_number(-1_200.0), "-1.2k");
    assert_eq!(format_number(12_345.0), "12.3k");
    assert_eq!(format_number(250.0), "250");
    assert_eq!(format_number(1.01), "1.01");
    assert_eq!(format_number(7.2e12), "7.2T");
}

#[test]
fn rounding_carries_into_next_prefix() {
    assert_eq!(format_number(999_999.0), "1M");
    assert_eq!(format_number(-999.9), "-1k");
}

#[test]
fn tick_labels_wrap_prefix_and_suffix() {
    assert_eq!(format_number_with_affixes(2_452_000.0, "", " B"), "2.45M B");
    assert_eq!(format_number_with_affixes(-0.25, "~", "%"), "~-0.25%");
}

#[test]
fn halfway_values_round_away_from_zero() {
    assert_eq!(format_number(1_005.0), "1.01k");
    assert_eq!(format_number(1_225.0), "1.23k");
    assert_eq!(format_number(12.25), "12.3");
    assert_eq!(format_number(1.125), "1.13");
    assert_eq!(format_number(0.0625), "0.063");
    assert_eq!(format_number(-0.0625), "-0.063");
    assert_eq!(format_number(-1_005.0), "-1.01k");
}

#[test]
fn values_just_below_halfway_round_down() {
    assert_eq!(format_number(0.0324), "0.032");
    assert_eq!(format_number(1_004.999), "1k");
    assert_eq!(format_number(0.062_499), "0.062");
}
