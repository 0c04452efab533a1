//! Loading of the tabular dataset.
//!
//! The dataset is a CSV file with a header row, such as the California housing table
//! (`MedInc,HouseAge,AveRooms,AveBedrms,Population,AveOccup,Latitude,Longitude,MedHouseVal`).
//! Every cell is either missing, a number or text.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stats::Series;

/// Spellings of a missing cell, compared case-insensitively
static MISSING: &[&str] = &["", "na", "nan", "n/a", "null", "none"];

fn parse_cell(cell: &str) -> Cell {
    let cell = cell.trim();

    if MISSING.iter().any(|m| m.eq_ignore_ascii_case(cell)) {
        Cell::Missing
    } else {
        match cell.parse::<f64>() {
            Ok(x) => Cell::Number(x),
            Err(_) => Cell::Text,
        }
    }
}

enum Cell {
    Missing,
    Number(f64),
    Text,
}

/// One column of the dataset
#[derive(Clone, Debug)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
    text: usize,
}

impl Column {
    fn new(name: &str) -> Column {
        Column {
            name: name.to_owned(),
            values: vec![],
            text: 0,
        }
    }

    fn push(&mut self, cell: &str) {
        match parse_cell(cell) {
            Cell::Missing => self.values.push(None),
            Cell::Number(x) => self.values.push(Some(x)),
            Cell::Text => {
                self.text += 1;
                self.values.push(None);
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks if every present cell holds a number
    pub fn is_numeric(&self) -> bool {
        self.text == 0
    }

    /// Checks if every cell is missing
    pub fn is_all_missing(&self) -> bool {
        self.text == 0 && self.values.iter().all(Option::is_none)
    }

    /// The numeric values of the column, indexed by row number
    ///
    /// Text cells show up as missing, check `is_numeric` first.
    pub fn to_series(&self) -> Series<f64> {
        Series::new(self.name.clone(), self.values.clone())
    }
}

/// A table of named columns, all of the same length
#[derive(Clone, Debug)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Reads the CSV file at `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|inner| Error::AccessError {
            path: path.to_owned(),
            inner,
        })?;

        let dataset = Dataset::from_reader(io::BufReader::new(file))?;
        tracing::info!(
            "Loaded {} rows and {} columns from {:?}",
            dataset.rows,
            dataset.columns.len(),
            path
        );

        Ok(dataset)
    }

    /// Reads CSV data with a header row
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut columns = reader
            .headers()?
            .iter()
            .map(Column::new)
            .collect::<Vec<_>>();
        if columns.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut rows = 0;
        for record in reader.records() {
            let record = record?;
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                column.push(cell);
            }
            rows += 1;
        }

        tracing::debug!("Parsed {} records", rows);

        Ok(Dataset { columns, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names, in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Looks a column up by its exact name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
