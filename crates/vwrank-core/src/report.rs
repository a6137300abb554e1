use crate::PeriodAverage;

/// Minimum width of the period column in report lines.
pub const PERIOD_COLUMN_WIDTH: usize = 11;

/// `"<period left-justified to 11><average to 2 decimals>"`.
pub fn format_line(average: &PeriodAverage) -> String {
    format!(
        "{:<width$}{:.2}",
        average.period,
        average.average,
        width = PERIOD_COLUMN_WIDTH
    )
}

pub fn format_lines(averages: &[PeriodAverage]) -> Vec<String> {
    averages.iter().map(format_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_period_and_rounds_average() {
        assert_eq!(
            format_line(&PeriodAverage::new("2019-07", 1186.4567)),
            "2019-07    1186.46"
        );
        assert_eq!(format_line(&PeriodAverage::new("2019", 7.0)), "2019       7.00");
    }

    #[test]
    fn long_period_is_not_truncated() {
        let line = format_line(&PeriodAverage::new("period-longer", 1.234));
        assert_eq!(line, "period-longer1.23");
    }

    #[test]
    fn printed_average_round_trips_to_two_decimals() {
        let average = PeriodAverage::new("2020-01", 175.125_49);
        let line = format_line(&average);
        let printed: f64 = line[PERIOD_COLUMN_WIDTH..].parse().expect("numeric suffix");
        assert!((printed - average.average).abs() <= 0.005);
    }
}
