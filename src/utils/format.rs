/// Formats a monetary amount with "Trader Precision" and grouped thousands.
/// - Large (>= 1): 2 decimals (21,833.00)
/// - Pennies (>= 0.01): 4 decimals (0.0421)
/// - Sub-penny: 8 decimals needed to see movement (0.00000231)
pub fn format_amount(value: f64) -> String {
    let abs_value = value.abs();

    let decimals = if value == 0.0 || abs_value >= 1.0 {
        2
    } else if abs_value >= 0.01 {
        4
    } else {
        8
    };

    group_thousands(&format!("{value:.decimals$}"))
}

/// Fixed two decimals, e.g. "1.37%".
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_amount, format_percent};

    #[test]
    fn large_amounts_group_thousands() {
        assert_eq!(format_amount(21833.0), "21,833.00");
        assert_eq!(format_amount(421543304770.0), "421,543,304,770.00");
        assert_eq!(format_amount(999.5), "999.50");
    }

    #[test]
    fn small_amounts_keep_precision() {
        assert_eq!(format_amount(0.0421), "0.0421");
        assert_eq!(format_amount(0.00000231), "0.00000231");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_groups() {
        assert_eq!(format_amount(-1234567.89), "-1,234,567.89");
    }

    #[test]
    fn percent_is_two_decimals() {
        assert_eq!(format_percent(1.37106), "1.37%");
        assert_eq!(format_percent(-68.35045), "-68.35%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
