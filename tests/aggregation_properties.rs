//! Behavior-driven tests for aggregation and ranking
//!
//! These tests verify WHAT the period averages and rankings guarantee for any
//! loaded price history, independent of where the prices came from.

use std::collections::HashSet;

use vwrank_tests::*;

// =============================================================================
// Aggregation: Partitioning
// =============================================================================

#[test]
fn every_day_lands_in_exactly_one_year_and_one_month() {
    // Given: Two years of daily history
    let records = two_year_history();

    // When: The history is aggregated both ways
    let years = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("years");
    let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect("months");

    // Then: Group sizes add back up to the input length
    let yearly_days: usize = years.iter().map(|a| a.trading_days).sum();
    let monthly_days: usize = months.iter().map(|a| a.trading_days).sum();
    assert_eq!(yearly_days, records.len());
    assert_eq!(monthly_days, records.len());

    // And: Each key appears once
    assert_eq!(years.len(), 2);
    assert_eq!(months.len(), 24);
    let keys: HashSet<&str> = months.iter().map(|a| a.period.as_str()).collect();
    assert_eq!(keys.len(), months.len());
}

#[test]
fn total_volume_is_preserved_across_groupings() {
    let records = two_year_history();
    let expected: f64 = records.iter().map(|r| r.volume).sum();

    let years = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("years");
    let total: f64 = years.iter().map(|a| a.total_volume).sum();

    assert_eq!(total, expected);
}

// =============================================================================
// Aggregation: Weighted Average
// =============================================================================

#[test]
fn volume_weighting_differs_from_simple_mean() {
    // Given: A cheap high-volume day and an expensive low-volume day
    let records = vec![
        record("2020-01-05", 100.0, 10.0),
        record("2020-01-20", 200.0, 30.0),
    ];

    // When: The month is aggregated
    let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect("months");

    // Then: The result is the volume-weighted 175, not the simple mean 150
    assert_eq!(months[0].period, "2020-01");
    assert_eq!(months[0].average, 175.0);
}

#[test]
fn single_day_period_averages_to_its_own_price() {
    let records = vec![
        record("2015-03-02", 571.34, 2_097_152.0),
        record("2016-07-11", 721.64, 1_024.0),
    ];

    let years = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("years");

    assert_eq!(years[0].average, 571.34);
    assert_eq!(years[1].average, 721.64);
}

#[test]
fn average_stays_within_price_range_of_its_days() {
    let records = two_year_history();
    let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect("months");

    for month in &months {
        let prices: Vec<f64> = records
            .iter()
            .filter(|r| r.date.year_month() == month.period)
            .map(|r| r.adj_close)
            .collect();
        let low = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let high = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(month.average >= low - 1e-9 && month.average <= high + 1e-9);
    }
}

#[test]
fn zero_volume_month_is_an_explicit_failure_unless_skipped() {
    // Given: A month where nothing traded
    let records = vec![
        record("2020-01-06", 10.0, 100.0),
        record("2020-02-03", 11.0, 0.0),
        record("2020-02-04", 12.0, 0.0),
    ];

    // When/Then: The default policy refuses to invent an average
    let err = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect_err("must fail");
    assert!(matches!(err, AggregateError::ZeroVolume { ref period } if period == "2020-02"));

    // And: Skipping drops only that month
    let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Skip).expect("skip");
    assert_eq!(months.len(), 1);
    assert!(months.iter().all(|m| m.average.is_finite()));

    // And: The year still has volume and is unaffected
    let years = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("years");
    assert_eq!(years[0].average, 10.0);
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn ascending_ranking_is_descending_reversed() {
    let records = two_year_history();
    let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect("months");

    let mut ascending = rank(&months, SortOrder::Ascending);
    ascending.reverse();

    assert_eq!(ascending, rank(&months, SortOrder::Descending));
}

#[test]
fn best_and_worst_six_come_from_opposite_ends() {
    let records = two_year_history();
    let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail).expect("months");

    let rankings = Rankings::build(&months, 6).expect("rankings");

    assert_eq!(rankings.best.len(), 6);
    assert_eq!(rankings.worst.len(), 6);
    // Prices drift upward, so the latest months are best and the earliest worst.
    assert_eq!(rankings.best[0].period, "2019-12");
    assert_eq!(rankings.worst[0].period, "2018-01");
    assert!(rankings
        .best
        .windows(2)
        .all(|pair| pair[0].average >= pair[1].average));
    assert!(rankings
        .worst
        .windows(2)
        .all(|pair| pair[0].average <= pair[1].average));
}

#[test]
fn fewer_than_six_groups_returns_all_of_them_sorted() {
    // Given: Only three years of data
    let records = vec![
        record("2017-05-01", 900.0, 10.0),
        record("2018-05-01", 1100.0, 10.0),
        record("2019-05-01", 1000.0, 10.0),
    ];
    let years = aggregate(&records, Period::Year, ZeroVolumePolicy::Fail).expect("years");

    // When: The top six are requested
    let best = top(&years, SortOrder::Descending, 6);

    // Then: Exactly the three years come back, best first
    let periods: Vec<&str> = best.iter().map(|a| a.period.as_str()).collect();
    assert_eq!(periods, vec!["2018", "2019", "2017"]);
}

#[test]
fn overflowing_sums_never_reach_the_rankings_as_nan() {
    // Given: Two days whose volumes overflow f64 once summed
    let records = vec![record("2020-01-02", 1.0, 1e308), record("2020-01-03", 1.0, 1e308)];

    // When: The month is aggregated
    let result = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail);

    // Then: The period is reported instead of averaging to NaN
    assert!(matches!(
        result,
        Err(AggregateError::NonFiniteAverage { ref period }) if period == "2020-01"
    ));
}
