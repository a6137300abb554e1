//! Daily price loading.
//!
//! Turns a `Date,Open,High,Low,Close,Adj Close,Volume` CSV into
//! [`DailyRecord`]s. Loading is all-or-nothing: the first bad row fails the
//! whole load and no partial history is returned.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::http_client::{HttpClient, HttpError, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};
use crate::{DailyRecord, TradeDate, ValidationError};

const DATE_COLUMN: usize = 0;
const ADJ_CLOSE_COLUMN: usize = 5;
const VOLUME_COLUMN: usize = 6;

/// Location of a daily price CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSource {
    Url(String),
    File(PathBuf),
}

impl Display for PriceSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reasons a price history could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("http request failed: {0}")]
    Http(#[from] HttpError),

    #[error("unexpected http status {status}")]
    Status { status: u16 },

    #[error("failed to read price file: {0}")]
    Io(#[from] std::io::Error),

    #[error("price data has no header row or no daily rows")]
    EmptyData,

    #[error("malformed csv at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("line {line}: missing column '{column}'")]
    MissingField { line: u64, column: &'static str },

    #[error("line {line}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: ValidationError,
    },
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(csv::Position::line).unwrap_or(0);
        Self::Csv {
            line,
            message: error.to_string(),
        }
    }
}

/// Fetches and parses daily price histories.
#[derive(Clone)]
pub struct PriceLoader {
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl PriceLoader {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn load(&self, source: &PriceSource) -> Result<Vec<DailyRecord>, LoadError> {
        let text = match source {
            PriceSource::Url(url) => self.fetch(url).await?,
            PriceSource::File(path) => {
                debug!(path = %path.display(), "reading price file");
                std::fs::read_to_string(path)?
            }
        };

        let records = parse_daily_csv(&text)?;
        info!(source = %source, rows = records.len(), "loaded daily prices");
        Ok(records)
    }

    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        debug!(url, timeout_ms = self.timeout_ms, "fetching price csv");
        let request = HttpRequest::get(url)
            .with_header("accept", "text/csv")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http.execute(request).await?;
        if !response.is_success() {
            return Err(LoadError::Status {
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

impl Default for PriceLoader {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()))
    }
}

impl std::fmt::Debug for PriceLoader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceLoader")
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

/// Parse CSV text with a `Date,Open,High,Low,Close,Adj Close,Volume` header.
///
/// Only the date, adjusted close and volume columns are kept, so trailing
/// extra columns are ignored. Blank lines are skipped; any row missing one of
/// the kept columns fails the whole parse.
pub fn parse_daily_csv(text: &str) -> Result<Vec<DailyRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    if reader.headers()?.is_empty() {
        return Err(LoadError::EmptyData);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(csv::Position::line).unwrap_or(0);

        let date = field(&row, line, DATE_COLUMN, "Date")?;
        let adj_close = number(&row, line, ADJ_CLOSE_COLUMN, "Adj Close")?;
        let volume = number(&row, line, VOLUME_COLUMN, "Volume")?;

        let record = TradeDate::parse(date)
            .and_then(|date| DailyRecord::new(date, adj_close, volume))
            .map_err(|source| LoadError::InvalidRecord { line, source })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyData);
    }

    Ok(records)
}

fn field<'r>(
    row: &'r csv::StringRecord,
    line: u64,
    index: usize,
    column: &'static str,
) -> Result<&'r str, LoadError> {
    row.get(index)
        .filter(|value| !value.is_empty())
        .ok_or(LoadError::MissingField { line, column })
}

fn number(
    row: &csv::StringRecord,
    line: u64,
    index: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    let raw = field(row, line, index, column)?;
    raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        line,
        column,
        value: raw.to_owned(),
    })
}
