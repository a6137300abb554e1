use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::TradeDate;

/// Calendar grouping unit used as the aggregation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Month,
    Year,
}

impl Period {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn key(self, date: &TradeDate) -> &str {
        match self {
            Self::Month => date.year_month(),
            Self::Year => date.year(),
        }
    }

    /// Capitalized plural used in report headings ("Months", "Years").
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Month => "Months",
            Self::Year => "Years",
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
