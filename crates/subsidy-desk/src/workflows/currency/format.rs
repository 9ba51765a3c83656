/// Formats an amount for Chilean display: `.` groups thousands, `,` marks
/// decimals, and at most two fraction digits are shown.
pub fn format_es_cl(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_es_cl;

    #[test]
    fn groups_thousands_and_trims_fraction() {
        assert_eq!(format_es_cl(0.0), "0");
        assert_eq!(format_es_cl(74_500.0), "74.500");
        assert_eq!(format_es_cl(1_117.5), "1.117,5");
        assert_eq!(format_es_cl(186.25), "186,25");
        assert_eq!(format_es_cl(745_737.55), "745.737,55");
        assert_eq!(format_es_cl(1_234_567.0), "1.234.567");
    }

    #[test]
    fn rounds_to_two_decimals_and_keeps_sign() {
        assert_eq!(format_es_cl(2.005_1), "2,01");
        assert_eq!(format_es_cl(-1_500.4), "-1.500,4");
        assert_eq!(format_es_cl(-0.001), "0");
    }
}
