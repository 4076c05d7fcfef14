use serde_json::{Number, Value};

const MAX_FRACTION_DIGITS: usize = 3;

/// en-US style: thousands grouped with `,`, at most three fraction digits,
/// trailing zeros dropped.
pub fn format_number(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        return group_integer(&value.to_string());
    }
    if let Some(value) = number.as_u64() {
        return group_integer(&value.to_string());
    }

    let value = number.as_f64().unwrap_or_default();
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let grouped = group_integer(integer);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

fn group_integer(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// Plain string form of a non-null, non-numeric cell.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
