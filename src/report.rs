//! Display formatting for currency and percentage fields

/// Dollar amount with two decimals, e.g. `$1234.50` or `-$12.00`
pub fn currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Percentage with one decimal, e.g. `55.5%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Fraction rendered as a whole percentage, e.g. `0.3` -> `30%`
pub fn whole_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(125_000.0), "$125000.00");
        assert_eq!(currency(280_657.024157), "$280657.02");
        assert_eq!(currency(-12.5), "-$12.50");
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(percent(7.0), "7.0%");
        assert_eq!(percent(55.47), "55.5%");
        assert_eq!(whole_percent(0.3), "30%");
        assert_eq!(whole_percent(0.05), "5%");
    }
}
