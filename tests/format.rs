use insider_term::ui::format::{fmt_count, fmt_pct, fmt_price, fmt_shares, fmt_value, time_ago};

#[test]
fn price_formats_with_separators_and_two_decimals() {
    assert_eq!(fmt_price(Some(150.23)), "$150.23");
    assert_eq!(fmt_price(Some(1503.2)), "$1,503.20");
    assert_eq!(fmt_price(Some(1_234_567.891)), "$1,234,567.89");
}

#[test]
fn zero_or_missing_price_is_a_placeholder() {
    assert_eq!(fmt_price(None), "—");
    assert_eq!(fmt_price(Some(0.0)), "—");
}

#[test]
fn pct_carries_explicit_sign() {
    assert_eq!(fmt_pct(Some(-1.5)), "-1.50%");
    assert_eq!(fmt_pct(Some(2.0)), "+2.00%");
    assert_eq!(fmt_pct(Some(0.0)), "+0.00%");
    assert_eq!(fmt_pct(None), "—");
}

#[test]
fn shares_compact_above_thousands() {
    assert_eq!(fmt_shares(1_500_000.0), "1.5M");
    assert_eq!(fmt_shares(12_340.0), "12.3K");
    assert_eq!(fmt_shares(999.6), "1000");
}

#[test]
fn value_compact_dollar_scales() {
    assert_eq!(fmt_value(Some(1.2e9)), "$1.2B");
    assert_eq!(fmt_value(Some(3.45e6)), "$3.5M");
    assert_eq!(fmt_value(Some(560_000.0)), "$560K");
    assert_eq!(fmt_value(Some(42.0)), "$42");
    assert_eq!(fmt_value(None), "—");
}

#[test]
fn count_groups_thousands() {
    assert_eq!(fmt_count(1_234_567.4), "1,234,567");
    assert_eq!(fmt_count(999.0), "999");
}

#[test]
fn time_ago_buckets() {
    let now = chrono::Utc::now();
    let fmt = |delta: chrono::Duration| (now - delta).to_rfc3339();
    assert_eq!(time_ago(&fmt(chrono::Duration::seconds(10))), "just now");
    assert_eq!(time_ago(&fmt(chrono::Duration::minutes(12))), "12m ago");
    assert_eq!(time_ago(&fmt(chrono::Duration::hours(3))), "3h ago");
    assert_eq!(time_ago(&fmt(chrono::Duration::days(2))), "2d ago");
    assert_eq!(time_ago("not-a-date"), "not-a-date");
}
