//! Interquartile range outlier detection for tabular housing data.
//!
//! The interesting part lives in [`stats::tukey`]: a pure function mapping a numeric
//! [`Series`](stats::Series) and a fence coefficient to an [`OutlierMask`](stats::OutlierMask).
//! Around it, [`dataset`] reads a CSV table, [`app`] asks the user for a column, checks it and
//! hands the result to the reports, which print the flagged rows and draw a scatter plot.
//!
//! ```
//! use housing_outliers::stats::{tukey, Series};
//!
//! let series = Series::from_values("MedHouseVal", &[1., 2., 3., 4., 5., 100.]);
//! let mask = tukey::detect(&series, tukey::TUKEY_COEF);
//!
//! assert_eq!(mask.as_slice(), &[false, false, false, false, false, true]);
//! ```

#[macro_use]
mod macros_private;

pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod stats;

mod format;
mod fs;
mod plot;
mod report;

pub use crate::app::Outcome;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::report::{OutlierReport, ReportContext};
