// Console logging and number formatting helpers.
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Grouped integer part plus at most three decimals, trailing zeros dropped.
pub fn format_decimal(v: f64) -> String {
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{}{}", sign, group_digits(int_part))
    } else {
        format!("{}{}.{}", sign, group_digits(int_part), frac)
    }
}

pub fn format_billions(v: f64) -> String {
    format!("${:.2} Billion", v)
}

pub fn format_dollars(v: f64) -> String {
    format!("${:.2}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn decimal_formatting() {
        assert_eq!(format_decimal(17_098_242.0), "17,098,242");
        assert_eq!(format_decimal(0.44), "0.44");
        assert_eq!(format_decimal(1234.5678), "1,234.568");
        assert_eq!(format_decimal(-2500.5), "-2,500.5");
        assert_eq!(format_decimal(-0.0001), "0");
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_billions(25462.7), "$25462.70 Billion");
        assert_eq!(format_dollars(76398.0), "$76398.00");
    }
}
