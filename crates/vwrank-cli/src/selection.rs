//! Menu choice between monthly, yearly or combined rankings.

use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use vwrank_core::Period;

const MENU: &str = "To make your selection, press:  \n\
1: The Best and Worst Six Months \n\
2: The Best and Worst Six Years \n\
3: The Best and Worst Six Months and The Best and Worst Six Years \n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Months,
    Years,
    Both,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid selection '{input}', expected 1 (months), 2 (years) or 3 (both)")]
    Invalid { input: String },

    #[error("no selection entered")]
    NoInput,
}

impl Selection {
    pub const fn periods(self) -> &'static [Period] {
        match self {
            Self::Months => &[Period::Month],
            Self::Years => &[Period::Year],
            Self::Both => &[Period::Month, Period::Year],
        }
    }
}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "months" => Ok(Self::Months),
            "2" | "years" => Ok(Self::Years),
            "3" | "both" => Ok(Self::Both),
            _ => Err(SelectionError::Invalid {
                input: value.trim().to_owned(),
            }),
        }
    }
}

/// Show the menu on `prompt` and read one answer line from `input`.
pub fn prompt<R, W>(input: &mut R, prompt: &mut W) -> Result<Selection, crate::error::CliError>
where
    R: BufRead,
    W: Write,
{
    prompt.write_all(MENU.as_bytes())?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SelectionError::NoInput.into());
    }

    Ok(line.parse::<Selection>()?)
}
