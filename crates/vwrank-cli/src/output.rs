use std::io::Write;

use vwrank_core::{format_line, Period, PeriodAverage};

use crate::error::CliError;
use crate::pipeline::{PeriodSection, Report};
use crate::selection::Selection;

pub fn render_json<W: Write>(report: &Report, pretty: bool, out: &mut W) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, report)?;
    } else {
        serde_json::to_writer(&mut *out, report)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn render_text<W: Write>(report: &Report, out: &mut W) -> Result<(), CliError> {
    let count = count_word(report.top);

    match report.selection {
        Selection::Months | Selection::Years => {
            let label = report
                .sections
                .first()
                .map(|section| section.period.plural_label())
                .unwrap_or_default();
            writeln!(out, "Please find the Best and Worst {count} {label} below.")?;
            for section in &report.sections {
                write_section(out, section, &count)?;
            }
        }
        Selection::Both => {
            writeln!(
                out,
                "Please find the Best and Worst {count} {} and The Best and Worst {count} {} below.",
                Period::Month.plural_label(),
                Period::Year.plural_label()
            )?;
            for section in &report.sections {
                writeln!(out)?;
                writeln!(
                    out,
                    "The Best and Worst {count} {} are:",
                    section.period.plural_label()
                )?;
                write_section(out, section, &count)?;
            }
        }
    }

    Ok(())
}

fn write_section<W: Write>(out: &mut W, section: &PeriodSection, count: &str) -> Result<(), CliError> {
    let label = section.period.plural_label();

    writeln!(out)?;
    writeln!(out, "The Best {count} {label} are:")?;
    write_lines(out, &section.rankings.best)?;

    writeln!(out)?;
    writeln!(out, "The Worst {count} {label} are:")?;
    write_lines(out, &section.rankings.worst)?;

    Ok(())
}

fn write_lines<W: Write>(out: &mut W, averages: &[PeriodAverage]) -> Result<(), CliError> {
    for average in averages {
        writeln!(out, "{}", format_line(average))?;
    }
    Ok(())
}

/// "Six" for the default list size; small counts are spelled out in headings.
fn count_word(n: usize) -> String {
    const WORDS: [&str; 12] = [
        "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
        "Twelve",
    ];

    n.checked_sub(1)
        .and_then(|index| WORDS.get(index))
        .map(|word| (*word).to_owned())
        .unwrap_or_else(|| n.to_string())
}
