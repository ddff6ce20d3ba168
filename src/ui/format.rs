use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Rupee amount with two decimals and Indian digit grouping:
/// the last three digits, then pairs (`1234567.8` → `"₹12,34,567.80"`).
pub(crate) fn rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₹{}.{paise}", group_lakh(whole))
}

fn group_lakh(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Cell text for an optional due date.
pub(crate) fn due_label(due: Option<NaiveDate>) -> String {
    match due {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
