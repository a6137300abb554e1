//! # vwrank Core
//!
//! Loading, aggregation and ranking of daily stock prices by
//! volume-weighted average.
//!
//! ## Overview
//!
//! The crate is a straight pipeline over an in-memory price history:
//!
//! - **Loader** fetches a `Date,Open,High,Low,Close,Adj Close,Volume` CSV
//!   from a URL or file and keeps date, adjusted close and volume
//! - **Aggregator** groups days by year or year-month and computes each
//!   group's volume-weighted average price
//! - **Ranker** orders the averages and selects the best and worst periods
//! - **Report** formats ranked periods as fixed-width lines
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Period grouping and weighted averages |
//! | [`domain`] | Validated domain types |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`loader`] | Price sources and CSV parsing |
//! | [`rank`] | Sorting and best/worst selection |
//! | [`report`] | Line formatting |
//!
//! ## Quick Start
//!
//! ```rust
//! use vwrank_core::{aggregate, parse_daily_csv, Period, Rankings, ZeroVolumePolicy};
//!
//! let csv = "Date,Open,High,Low,Close,Adj Close,Volume\n\
//! 2020-01-05,0,0,0,0,100.0,10\n\
//! 2020-01-20,0,0,0,0,200.0,30\n";
//!
//! let records = parse_daily_csv(csv)?;
//! let months = aggregate(&records, Period::Month, ZeroVolumePolicy::Fail)?;
//! let rankings = Rankings::build(&months, 6)?;
//!
//! assert_eq!(rankings.best[0].period, "2020-01");
//! assert_eq!(rankings.best[0].average, 175.0);
//! # Ok::<(), vwrank_core::CoreError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ PriceLoader     │────▶│ HTTP Client      │
//! │ (url / file)    │     │ (reqwest/static) │
//! └────────┬────────┘     └──────────────────┘
//!          │ Vec<DailyRecord>
//!          ▼
//! ┌─────────────────┐
//! │ aggregate       │  month / year
//! └────────┬────────┘
//!          │ Vec<PeriodAverage>
//!          ▼
//! ┌─────────────────┐
//! │ rank / Rankings │  best / worst
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Each stage has its own error type so callers can tell retrieval, parse and
//! computation failures apart:
//!
//! ```rust
//! use vwrank_core::{AggregateError, CoreError, LoadError};
//!
//! fn describe(error: &CoreError) -> &'static str {
//!     match error {
//!         CoreError::Load(LoadError::Http(_) | LoadError::Status { .. }) => "retrieval",
//!         CoreError::Load(_) => "parse",
//!         CoreError::Aggregate(AggregateError::ZeroVolume { .. }) => "computation",
//!         _ => "other",
//!     }
//! }
//! ```

pub mod aggregate;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod loader;
pub mod rank;
pub mod report;

// Aggregation
pub use aggregate::{aggregate, weighted_average, AggregateError, ZeroVolumePolicy};

// Domain models
pub use domain::{DailyRecord, Period, PeriodAverage, TradeDate};

// Error types
pub use error::{CoreError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

// Loading
pub use loader::{parse_daily_csv, LoadError, PriceLoader, PriceSource};

// Ranking
pub use rank::{rank, top, Rankings, SortOrder, DEFAULT_RANKING_SIZE};

// Report formatting
pub use report::{format_line, format_lines, PERIOD_COLUMN_WIDTH};
