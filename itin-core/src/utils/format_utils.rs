use crate::fuel::FuelEstimate;
use chrono::{NaiveDate, NaiveTime};

/// Locale bits used when printing numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub currency_symbol: String,
    pub volume_unit: String,
}

impl Default for NumberFormat {
    /// pt-BR: `1.234,56`, `R$`, litres.
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
            currency_symbol: "R$".to_string(),
            volume_unit: "L".to_string(),
        }
    }
}

/// Rounds to `decimals` places and groups the integer part in threes.
pub fn format_number(value: f64, decimals: usize, fmt: &NumberFormat) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(fmt.grouping_separator);
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push(fmt.decimal_separator);
        grouped.push_str(frac);
    }

    let is_zero = !fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `45,8 L | R$ 265,83`
pub fn format_fuel_estimate(estimate: &FuelEstimate, fmt: &NumberFormat) -> String {
    format!(
        "{} {} | {} {}",
        format_number(estimate.volume, 1, fmt),
        fmt.volume_unit,
        fmt.currency_symbol,
        format_number(estimate.cost, 2, fmt),
    )
}

/// `2025-07-21 06:00`, leaving out whatever is unset.
pub fn format_schedule(date: Option<NaiveDate>, time: Option<NaiveTime>) -> String {
    match (date, time) {
        (Some(d), Some(t)) => format!("{} {}", d.format("%Y-%m-%d"), t.format("%H:%M")),
        (Some(d), None) => d.format("%Y-%m-%d").to_string(),
        (None, Some(t)) => t.format("%H:%M").to_string(),
        (None, None) => "-".to_string(),
    }
}

/// `12.3 KB`
pub fn format_byte_size(len: usize) -> String {
    let kb = len as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberFormat {
        NumberFormat {
            decimal_separator: '.',
            grouping_separator: ',',
            currency_symbol: "$".to_string(),
            volume_unit: "gal".to_string(),
        }
    }

    #[test]
    fn pt_br_grouping_and_decimals() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(265.8333, 2, &fmt), "265,83");
        assert_eq!(format_number(45.8333, 1, &fmt), "45,8");
        assert_eq!(format_number(1234567.891, 2, &fmt), "1.234.567,89");
        assert_eq!(format_number(999.999, 2, &fmt), "1.000,00");
        assert_eq!(format_number(0.0, 2, &fmt), "0,00");
    }

    #[test]
    fn other_separators() {
        assert_eq!(format_number(1234.5, 1, &en()), "1,234.5");
        assert_eq!(format_number(12.0, 0, &en()), "12");
    }

    #[test]
    fn negatives_keep_sign_unless_rounded_to_zero() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(-1500.25, 2, &fmt), "-1.500,25");
        assert_eq!(format_number(-0.001, 2, &fmt), "0,00");
    }

    #[test]
    fn fuel_summary() {
        let est = FuelEstimate {
            volume: 45.833_333,
            cost: 265.833_333,
        };
        assert_eq!(
            format_fuel_estimate(&est, &NumberFormat::default()),
            "45,8 L | R$ 265,83"
        );
    }

    #[test]
    fn schedule_with_missing_parts() {
        let d = NaiveDate::from_ymd_opt(2025, 7, 21);
        let t = NaiveTime::from_hms_opt(6, 0, 0);
        assert_eq!(format_schedule(d, t), "2025-07-21 06:00");
        assert_eq!(format_schedule(d, None), "2025-07-21");
        assert_eq!(format_schedule(None, t), "06:00");
        assert_eq!(format_schedule(None, None), "-");
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(format_byte_size(2048), "2.0 KB");
        assert_eq!(format_byte_size(3 * 1024 * 1024), "3.0 MB");
    }
}
