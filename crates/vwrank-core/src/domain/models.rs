use serde::{Deserialize, Serialize};

use crate::{TradeDate, ValidationError};

/// One trading day from the price history: adjusted close and traded volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: TradeDate,
    pub adj_close: f64,
    pub volume: f64,
}

impl DailyRecord {
    pub fn new(date: TradeDate, adj_close: f64, volume: f64) -> Result<Self, ValidationError> {
        validate_non_negative("adj_close", adj_close)?;
        validate_non_negative("volume", volume)?;

        Ok(Self {
            date,
            adj_close,
            volume,
        })
    }

    /// Convenience constructor from a raw date string.
    pub fn parse(date: &str, adj_close: f64, volume: f64) -> Result<Self, ValidationError> {
        Self::new(TradeDate::parse(date)?, adj_close, volume)
    }

    /// Price weighted by the day's volume, the numerator term of a VWAP.
    pub fn turnover(&self) -> f64 {
        self.adj_close * self.volume
    }
}

/// Volume-weighted average adjusted close for one period key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAverage {
    pub period: String,
    pub average: f64,
    pub total_volume: f64,
    pub trading_days: usize,
}

impl PeriodAverage {
    pub fn new(period: impl Into<String>, average: f64) -> Self {
        Self {
            period: period.into(),
            average,
            total_volume: 0.0,
            trading_days: 0,
        }
    }

    pub fn with_totals(mut self, total_volume: f64, trading_days: usize) -> Self {
        self.total_volume = total_volume;
        self.trading_days = trading_days;
        self
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
