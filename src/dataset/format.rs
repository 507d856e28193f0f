//! Number formatting helpers shared by the API, charts, and CLI

/// Group digits in thousands with commas: `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Short axis label: `9_792_552` -> `"9.8M"`, `450_000` -> `"450K"`
pub fn compact(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => trim_decimal(n as f64 / 1_000.0, "K"),
        _ => trim_decimal(n as f64 / 1_000_000.0, "M"),
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let s = format!("{:.1}", value);
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("{}{}", s, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(150), "150");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_190_686), "1,190,686");
        assert_eq!(group_thousands(12_345_678_901), "12,345,678,901");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(500), "500");
        assert_eq!(compact(450_000), "450K");
        assert_eq!(compact(1_500_000), "1.5M");
        assert_eq!(compact(9_792_552), "9.8M");
        assert_eq!(compact(2_000_000), "2M");
    }
}
