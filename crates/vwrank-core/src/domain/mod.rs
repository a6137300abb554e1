//! # Domain Models
//!
//! Validated value types for the price pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TradeDate`] | `YYYY-MM-DD` session date |
//! | [`DailyRecord`] | Date, adjusted close and volume for one day |
//! | [`Period`] | Month or year grouping unit |
//! | [`PeriodAverage`] | Volume-weighted average for one period key |
//!
//! Construction validates every invariant, so downstream stages can slice
//! dates and divide by volume sums without re-checking input:
//!
//! ```rust
//! use vwrank_core::{DailyRecord, Period, ValidationError};
//!
//! let record = DailyRecord::parse("2020-01-05", 100.0, 10.0)?;
//! assert_eq!(Period::Month.key(&record.date), "2020-01");
//!
//! let invalid = DailyRecord::parse("2020-01-05", -1.0, 10.0);
//! assert!(matches!(invalid, Err(ValidationError::NegativeValue { .. })));
//! # Ok::<(), ValidationError>(())
//! ```

mod models;
mod period;
mod trade_date;

pub use models::{DailyRecord, PeriodAverage};
pub use period::Period;
pub use trade_date::TradeDate;
