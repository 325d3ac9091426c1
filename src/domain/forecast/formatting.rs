//! Number parsing and currency rendering shared by form reading and result display.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Lenient float parse in the manner of browser form handling: leading
/// whitespace is skipped, the longest numeric prefix is used and trailing
/// garbage is ignored. Input without any numeric prefix yields NaN.
pub fn parse_price_input(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Currency string with exactly two fractional digits.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}Infinity", CURRENCY_SYMBOL, sign);
    }
    // `+ 0.0` folds negative zero into zero.
    format!("{}{:.2}", CURRENCY_SYMBOL, value + 0.0)
}
