//! Display formatting for prices, percentages, share counts, and times.

use chrono::{DateTime, Utc};

pub const PLACEHOLDER: &str = "—";

/// `Some(1503.23)` → `"$1,503.23"`. Zero and absent prices render as the
/// placeholder, matching how the backend reports unavailable quotes.
pub fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 => format!("${}", thousands(p, 2)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Signed two-decimal percent; non-negative values carry an explicit `+`.
pub fn fmt_pct(pct: Option<f64>) -> String {
    match pct {
        Some(n) if n >= 0.0 => format!("+{n:.2}%"),
        Some(n) => format!("{n:.2}%"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Compact share count: `1.5M`, `12.3K`, otherwise rounded whole shares.
pub fn fmt_shares(shares: f64) -> String {
    if shares >= 1e6 {
        format!("{:.1}M", shares / 1e6)
    } else if shares >= 1e3 {
        format!("{:.1}K", shares / 1e3)
    } else {
        format!("{}", shares.round() as i64)
    }
}

/// Compact dollar value: `$1.2B`, `$3.4M`, `$560K`, `$42`.
pub fn fmt_value(value: Option<f64>) -> String {
    let Some(n) = value else {
        return PLACEHOLDER.to_string();
    };
    if n >= 1e9 {
        format!("${:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("${:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("${:.0}K", n / 1e3)
    } else {
        format!("${n:.0}")
    }
}

/// Relative time against now for an RFC 3339 timestamp; unparsable input is
/// echoed back rather than erroring.
pub fn time_ago(iso: &str) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(iso) else {
        return iso.to_string();
    };
    let minutes = Utc::now()
        .signed_duration_since(then.with_timezone(&Utc))
        .num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

/// Group the integer part with commas, keeping `decimals` fraction digits.
fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whole-number thousands grouping, used by the scan results table.
pub fn fmt_count(value: f64) -> String {
    thousands(value.round(), 0)
}
