use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

/// Calendar date of a trading session, kept in its `YYYY-MM-DD` form.
///
/// Period keys are prefixes of this string, so it is validated once here and
/// sliced freely afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TradeDate(String);

impl TradeDate {
    /// Parse a `YYYY-MM-DD` date, surrounding whitespace allowed.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let format = format_description!("[year]-[month]-[day]");
        let date = Date::parse(trimmed, format).map_err(|_| ValidationError::InvalidDate {
            value: input.to_owned(),
        })?;

        // `[year]` accepts a leading sign and longer years; keys rely on exactly ten bytes.
        if trimmed.len() != 10 || date.year() < 0 {
            return Err(ValidationError::InvalidDate {
                value: input.to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `YYYY` prefix.
    pub fn year(&self) -> &str {
        &self.0[..4]
    }

    /// `YYYY-MM` prefix.
    pub fn year_month(&self) -> &str {
        &self.0[..7]
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TradeDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for TradeDate {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TradeDate> for String {
    fn from(value: TradeDate) -> Self {
        value.0
    }
}
