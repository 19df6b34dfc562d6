//! Rupee rendering with Indian-system digit grouping, matching what
//! `Intl.NumberFormat('en-IN')` produces with zero fraction digits.

/// Rounds to whole rupees (half away from zero) and formats, e.g. `₹1,50,000`.
pub fn format_inr(value: f64) -> String {
    format_units(value.round() as i64)
}

/// Like `format_inr` but flooring, for the withdrawal-cap message.
pub fn format_inr_floor(value: f64) -> String {
    format_units(value.floor() as i64)
}

fn format_units(units: i64) -> String {
    let digits = units.unsigned_abs().to_string();
    let grouped = group_indian(&digits);
    if units < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

// Indian grouping: the last three digits form one group, everything before
// them groups in twos (1,00,00,000 rather than 10,000,000).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
