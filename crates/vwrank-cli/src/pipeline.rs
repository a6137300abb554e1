use serde::Serialize;
use tracing::info;
use vwrank_core::{aggregate, Period, PriceLoader, PriceSource, Rankings, ZeroVolumePolicy};

use crate::error::CliError;
use crate::selection::Selection;

/// Knobs that shape the report independently of where prices come from.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub selection: Selection,
    pub top: usize,
    pub zero_volume: ZeroVolumePolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSection {
    pub period: Period,
    #[serde(flatten)]
    pub rankings: Rankings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selection: Selection,
    pub top: usize,
    pub sections: Vec<PeriodSection>,
}

/// Load the price history and rank every period kind the selection asks for.
pub async fn build_report(
    loader: &PriceLoader,
    source: &PriceSource,
    options: ReportOptions,
) -> Result<Report, CliError> {
    let records = loader.load(source).await?;

    let mut sections = Vec::with_capacity(options.selection.periods().len());
    for &period in options.selection.periods() {
        let averages = aggregate(&records, period, options.zero_volume)?;
        info!(%period, groups = averages.len(), "ranked periods");
        sections.push(PeriodSection {
            period,
            rankings: Rankings::build(&averages, options.top)?,
        });
    }

    Ok(Report {
        selection: options.selection,
        top: options.top,
        sections,
    })
}
