//! Ordering of period averages into best and worst lists.

use serde::{Deserialize, Serialize};

use crate::{PeriodAverage, ValidationError};

/// Number of periods shown in each best/worst list by default.
pub const DEFAULT_RANKING_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Lowest average first ("worst").
    Ascending,
    /// Highest average first ("best").
    Descending,
}

/// Stable sort of `averages` by their average value.
///
/// Equal averages keep their relative input order in both directions.
pub fn rank(averages: &[PeriodAverage], order: SortOrder) -> Vec<PeriodAverage> {
    let mut ranked = averages.to_vec();
    match order {
        SortOrder::Ascending => ranked.sort_by(|a, b| a.average.total_cmp(&b.average)),
        SortOrder::Descending => ranked.sort_by(|a, b| b.average.total_cmp(&a.average)),
    }
    ranked
}

/// First `n` entries of `rank(averages, order)`; fewer when fewer exist.
pub fn top(averages: &[PeriodAverage], order: SortOrder, n: usize) -> Vec<PeriodAverage> {
    let mut ranked = rank(averages, order);
    ranked.truncate(n);
    ranked
}

/// Best and worst periods of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub best: Vec<PeriodAverage>,
    pub worst: Vec<PeriodAverage>,
}

impl Rankings {
    pub fn build(averages: &[PeriodAverage], size: usize) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyRanking);
        }

        Ok(Self {
            best: top(averages, SortOrder::Descending, size),
            worst: top(averages, SortOrder::Ascending, size),
        })
    }
}
