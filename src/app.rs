//! Glue between the dataset, the user and the outlier detection.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::dataset::{Column, Dataset};
use crate::error::{Error, Result};
use crate::report::{OutlierReport, Report, ReportContext, Reports};
use crate::stats::tukey;

/// How a run ended
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Outliers were listed and plotted
    Reported { column: String, outliers: usize },
    /// The column had no outliers, nothing was plotted
    NoOutliers { column: String },
    /// Every value of the column is missing
    AllMissing { column: String },
    /// The column holds text
    NonNumeric { column: String },
}

/// Lists the available columns and asks for one until a valid name is entered
///
/// Fails with `Error::InputClosed` if the input ends first.
pub fn prompt_column<'d, R, W>(
    dataset: &'d Dataset,
    input: &mut R,
    output: &mut W,
) -> Result<&'d Column>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Available columns: {}",
        dataset.names().collect::<Vec<_>>().join(", ")
    )?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a column name: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let name = line.trim();
        match dataset.column(name) {
            Some(column) => {
                tracing::debug!("Selected column {:?}", name);
                return Ok(column);
            }
            None => {
                tracing::debug!("Rejected column name {:?}", name);
                writeln!(output, "Unknown column name. Try again.")?;
            }
        }
    }
}

/// Checks the column, flags its outliers and reports them
pub fn analyze<W: Write>(config: &Config, column: &Column, output: &mut W) -> Result<Outcome> {
    let name = column.name().to_owned();

    if column.is_all_missing() {
        writeln!(output, "All values in the selected column are missing")?;
        return Ok(Outcome::AllMissing { column: name });
    }

    if !column.is_numeric() {
        writeln!(output, "Column values must be numeric to search for outliers")?;
        return Ok(Outcome::NonNumeric { column: name });
    }

    let series = column.to_series();
    let coef = config.coefficient();
    let labeled = tukey::classify(&series, coef);
    let fences = labeled.fences();
    let mask = labeled.mask();
    if let Some(f) = fences {
        tracing::info!(
            "Fences for {:?} with coefficient {}: [{}, {}]",
            name,
            coef,
            f.lower,
            f.upper
        );
    }

    let outliers = mask.count();
    if outliers == 0 {
        writeln!(output, "No outliers found")?;
        return Ok(Outcome::NoOutliers { column: name });
    }

    let report = OutlierReport::new(&series, &mask).with_fences(fences);
    let context = ReportContext::new(config);
    Reports::new(config).outliers(&report, &context, output)?;

    Ok(Outcome::Reported {
        column: name,
        outliers,
    })
}

/// Loads the dataset, asks for a column and reports its outliers
pub fn run<R, W>(config: &Config, mut input: R, mut output: W) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let dataset = Dataset::from_path(config.dataset_path())?;
    let column = prompt_column(&dataset, &mut input, &mut output)?;

    analyze(config, column, &mut output)
}
