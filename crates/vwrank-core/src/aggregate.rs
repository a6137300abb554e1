//! Volume-weighted period averages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{DailyRecord, Period, PeriodAverage};

/// What to do with a period whose total traded volume is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroVolumePolicy {
    #[default]
    Fail,
    Skip,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("period '{period}' has zero total volume; its weighted average is undefined")]
    ZeroVolume { period: String },

    #[error("period '{period}' overflows f64 when weighting prices by volume")]
    NonFiniteAverage { period: String },
}

/// `sum(adj_close * volume) / sum(volume)` over `records`.
///
/// Returns `None` when the total volume is zero, including for an empty slice,
/// or when the sums overflow and the quotient would not be finite.
pub fn weighted_average<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let (turnover, volume) = sums(records);
    (volume > 0.0)
        .then(|| turnover / volume)
        .filter(|average| average.is_finite())
}

/// `(sum(adj_close * volume), sum(volume))`.
fn sums<'a, I>(records: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    records
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(turnover, volume), record| {
            (turnover + record.turnover(), volume + record.volume)
        })
}

/// Group `records` by `period` and compute each group's weighted average.
///
/// Groups come back in the order their key first appears in `records`.
pub fn aggregate(
    records: &[DailyRecord],
    period: Period,
    policy: ZeroVolumePolicy,
) -> Result<Vec<PeriodAverage>, AggregateError> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&DailyRecord>> = HashMap::new();

    for record in records {
        let key = period.key(&record.date);
        groups
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(record);
    }

    let mut averages = Vec::with_capacity(order.len());
    for key in order {
        let members = groups.remove(key).unwrap_or_default();
        let (turnover, total_volume) = sums(members.iter().copied());

        if total_volume == 0.0 {
            match policy {
                ZeroVolumePolicy::Fail => {
                    return Err(AggregateError::ZeroVolume {
                        period: key.to_owned(),
                    })
                }
                ZeroVolumePolicy::Skip => {
                    warn!(period = key, days = members.len(), "skipping zero-volume period");
                    continue;
                }
            }
        }

        // Finite inputs can still overflow once summed.
        let average = turnover / total_volume;
        if !average.is_finite() {
            return Err(AggregateError::NonFiniteAverage {
                period: key.to_owned(),
            });
        }

        averages.push(PeriodAverage::new(key, average).with_totals(total_volume, members.len()));
    }

    debug!(%period, groups = averages.len(), "aggregated period averages");
    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, adj_close: f64, volume: f64) -> DailyRecord {
        DailyRecord::parse(date, adj_close, volume).expect("valid record")
    }

    #[test]
    fn monthly_average_is_volume_weighted() {
        let records = vec![
            record("2020-01-05", 100.0, 10.0),
            record("2020-01-20", 200.0, 30.0),
        ];

        let averages = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect("ok");

        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].period, "2020-01");
        assert_eq!(averages[0].average, 175.0);
        assert_eq!(averages[0].total_volume, 40.0);
        assert_eq!(averages[0].trading_days, 2);
    }

    #[test]
    fn single_record_average_equals_its_price() {
        let records = vec![record("2019-06-14", 1093.27, 1_048_576.0)];
        let averages = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("ok");
        assert_eq!(averages[0].average, 1093.27);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let records = vec![
            record("2019-12-31", 1.0, 1.0),
            record("2018-01-02", 2.0, 1.0),
            record("2019-01-02", 3.0, 1.0),
        ];
        let averages = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("ok");
        let keys: Vec<&str> = averages.iter().map(|a| a.period.as_str()).collect();
        assert_eq!(keys, vec!["2019", "2018"]);
        assert_eq!(averages[0].average, 2.0);
    }

    #[test]
    fn zero_volume_group_fails_by_default() {
        let records = vec![
            record("2020-01-05", 100.0, 10.0),
            record("2020-02-05", 100.0, 0.0),
        ];
        let err = aggregate(&records, Period::Month, ZeroVolumePolicy::default())
            .expect_err("must fail");
        assert_eq!(
            err,
            AggregateError::ZeroVolume {
                period: String::from("2020-02")
            }
        );
    }

    #[test]
    fn zero_volume_group_can_be_skipped() {
        let records = vec![
            record("2020-01-05", 100.0, 10.0),
            record("2020-02-05", 100.0, 0.0),
        ];
        let averages = aggregate(&records, Period::Month, ZeroVolumePolicy::Skip).expect("ok");
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].period, "2020-01");
    }

    #[test]
    fn overflowing_volume_is_an_error_not_nan() {
        let records = vec![
            record("2020-01-02", 1.0, 1e308),
            record("2020-01-03", 1.0, 1e308),
        ];

        let err = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail)
            .expect_err("must fail");
        assert_eq!(
            err,
            AggregateError::NonFiniteAverage {
                period: String::from("2020-01")
            }
        );

        let skipped = aggregate(&records, Period::Month, ZeroVolumePolicy::Skip);
        assert!(matches!(skipped, Err(AggregateError::NonFiniteAverage { .. })));
        assert_eq!(weighted_average(&records), None);
    }

    #[test]
    fn weighted_average_of_nothing_is_none() {
        let empty: [DailyRecord; 0] = [];
        assert_eq!(weighted_average(&empty), None);
    }
}
