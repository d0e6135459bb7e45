//! Number formatting for report cells

const THOUSAND: u64 = 1_000;
const HUNDRED_THOUSAND: u64 = 100_000;
const MILLION: u64 = 1_000_000;
const HUNDRED_MILLION: u64 = 100_000_000;
const BILLION: u64 = 1_000_000_000;
const HUNDRED_BILLION: u64 = 100_000_000_000;
const TRILLION: u64 = 1_000_000_000_000;
const HUNDRED_TRILLION: u64 = 100_000_000_000_000;

/// Compact count: one truncated decimal below a hundred units of the suffix, none above.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_short;
///
/// assert_eq!(format_number_short(1234), "1.2k");
/// assert_eq!(format_number_short(123_456), "123k");
/// ```
pub fn format_number_short(value: u64) -> String {
    // largest first; `T` has no upper bound
    let scales = [
        (TRILLION, HUNDRED_TRILLION, "T"),
        (BILLION, HUNDRED_BILLION, "B"),
        (MILLION, HUNDRED_MILLION, "M"),
        (THOUSAND, HUNDRED_THOUSAND, "k"),
    ];

    for (unit, coarse_from, suffix) in scales {
        if value >= unit {
            let whole = value / unit;
            let tenths = (value % unit) * 10 / unit;
            return if tenths == 0 || value >= coarse_from {
                format!("{}{}", whole, suffix)
            } else {
                format!("{}.{}{}", whole, tenths, suffix)
            };
        }
    }

    value.to_string()
}

/// Percentage rounded to one decimal, trailing `.0` dropped
pub fn format_percentage(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{}%", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_short() {
        assert_eq!(format_number_short(0), "0");
        assert_eq!(format_number_short(999), "999");
        assert_eq!(format_number_short(1_000), "1k");
        assert_eq!(format_number_short(1_234), "1.2k");
        assert_eq!(format_number_short(1_299), "1.2k");
        assert_eq!(format_number_short(99_950), "99.9k");
        assert_eq!(format_number_short(123_456), "123k");
        assert_eq!(format_number_short(1_500_000), "1.5M");
        assert_eq!(format_number_short(250_000_000), "250M");
        assert_eq!(format_number_short(2_000_000_000), "2B");
        assert_eq!(format_number_short(999_999_999_999), "999B");
    }

    #[test]
    fn test_format_number_short_trillions() {
        assert_eq!(format_number_short(1_000_000_000_000), "1T");
        assert_eq!(format_number_short(4_560_000_000_000), "4.5T");
        assert_eq!(format_number_short(u64::MAX), "18446744T");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(60.0), "60%");
        assert_eq!(format_percentage(12.34), "12.3%");
        assert_eq!(format_percentage(0.06), "0.1%");
    }
}
