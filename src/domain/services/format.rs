use chrono::{Datelike, NaiveDate};

/// Rounds to `decimals` places with ties going away from zero, the way
/// browser number formatting does (`0.125` -> `0.13`).
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

pub fn format_number_with_commas(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, round_half_away(value.abs(), decimals));
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    if value < 0.0 && !is_rounded_zero(&grouped) {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn is_rounded_zero(text: &str) -> bool {
    text.chars().all(|ch| ch == '0' || ch == '.' || ch == ',')
}

/// en-US dollar amount: `$1,234.50`, `-$700.00`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$0.00".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }
    let text = format_number_with_commas(value, 2);
    match text.strip_prefix('-') {
        Some(magnitude) => format!("-${magnitude}"),
        None => format!("${text}"),
    }
}

pub fn format_percent(value: f64) -> String {
    let rounded = round_half_away(value, 2);
    // -0.00% reads as a sign error; show it as plain zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.2}%")
}

/// en-US short date without zero padding, e.g. `3/7/2026`.
pub fn format_report_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_with_commas_handles_decimals() {
        assert_eq!(format_number_with_commas(12345.678, 0), "12,346");
        assert_eq!(format_number_with_commas(12345.678, 2), "12,345.68");
        assert_eq!(format_number_with_commas(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number_with_commas(999.0, 2), "999.00");
        assert_eq!(format_number_with_commas(1_000_000.0, 0), "1,000,000");
    }

    #[test]
    fn format_currency_uses_dollar_sign_and_sign_prefix() {
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(255.0), "$255.00");
        assert_eq!(format_currency(-700.0), "-$700.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn format_currency_drops_sign_of_rounded_zero() {
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn half_cent_ties_round_away_from_zero() {
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(-0.125), "-$0.13");
        assert_eq!(format_currency(2.5), "$2.50");
        assert_eq!(format_number_with_commas(0.5, 0), "1");
        assert_eq!(format_number_with_commas(1234.125, 2), "1,234.13");
        assert_eq!(format_percent(0.125), "0.13%");
        assert_eq!(format_percent(-0.125), "-0.13%");
    }

    #[test]
    fn format_percent_never_shows_negative_zero() {
        assert_eq!(format_percent(-0.0), "0.00%");
        assert_eq!(format_percent(-0.001), "0.00%");
    }

    #[test]
    fn format_percent_fixes_two_decimals() {
        assert_eq!(format_percent(60.0), "60.00%");
        assert_eq!(format_percent(12.682503), "12.68%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn format_report_date_is_unpadded_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date");
        assert_eq!(format_report_date(date), "3/7/2026");
    }
}
