use std::cmp;
use std::io::Write;
use std::path::{Path, PathBuf};

use anes::{Attribute, Color, ResetAttributes, SetAttribute, SetForegroundColor};
use itertools::{Either, Itertools};
use serde_derive::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::format;
use crate::fs;
use crate::plot;
use crate::stats::{Fences, OutlierMask, Series};

const MAX_FILE_NAME_LEN: usize = 64;

fn truncate_to_character_boundary(s: &mut String, max_len: usize) {
    let mut boundary = cmp::min(max_len, s.len());
    while !s.is_char_boundary(boundary) {
        boundary -= 1;
    }
    s.truncate(boundary);
}

pub fn make_filename_safe(string: &str) -> String {
    let mut string = string.replace(
        &['?', '"', '/', '\\', '*', '<', '>', ':', '|', '^', ' '][..],
        "_",
    );

    truncate_to_character_boundary(&mut string, MAX_FILE_NAME_LEN);

    if cfg!(target_os = "windows") {
        // On Windows, file names are not case-sensitive, so lowercase everything.
        string = string.to_lowercase();
    }

    string
}

/// A series together with the outlier mask computed for it
///
/// Only partitions the rows according to the mask, it never classifies anything itself.
pub struct OutlierReport<'a> {
    series: &'a Series<f64>,
    mask: &'a OutlierMask,
    fences: Option<Fences<f64>>,
}

impl<'a> OutlierReport<'a> {
    /// `mask` must have been computed from `series`
    pub fn new(series: &'a Series<f64>, mask: &'a OutlierMask) -> OutlierReport<'a> {
        debug_assert_eq!(series.len(), mask.len());

        OutlierReport {
            series,
            mask,
            fences: None,
        }
    }

    /// Attaches the fences the mask was computed with, for display
    pub fn with_fences(mut self, fences: Option<Fences<f64>>) -> OutlierReport<'a> {
        self.fences = fences;
        self
    }

    pub fn name(&self) -> &str {
        self.series.name()
    }

    /// Number of rows in the series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of flagged rows
    pub fn count(&self) -> usize {
        self.mask.count()
    }

    pub fn fences(&self) -> Option<Fences<f64>> {
        self.fences
    }

    /// The flagged rows as `(row index, value)`, in their original order
    pub fn outliers(&self) -> Vec<(usize, f64)> {
        self.series
            .iter()
            .zip(self.mask)
            .filter(|(_, &flagged)| flagged)
            .filter_map(|((&i, &x), _)| x.map(|x| (i, x)))
            .collect()
    }

    /// Splits the present values into `(outliers, the rest)`, each in original order
    pub fn partition(&self) -> (Vec<f64>, Vec<f64>) {
        self.series
            .values()
            .iter()
            .zip(self.mask)
            .filter_map(|(&x, &flagged)| x.map(|x| (x, flagged)))
            .partition_map(|(x, flagged)| {
                if flagged {
                    Either::Left(x)
                } else {
                    Either::Right(x)
                }
            })
    }
}

pub struct ReportContext {
    pub output_directory: PathBuf,
    pub plot_size: (u32, u32),
}

impl ReportContext {
    pub fn new(config: &Config) -> ReportContext {
        ReportContext {
            output_directory: config.output_directory_path().to_owned(),
            plot_size: config.size(),
        }
    }

    pub fn report_path<P: AsRef<Path> + ?Sized>(&self, column: &str, file_name: &P) -> PathBuf {
        let mut path = self.output_directory.clone();
        path.push(make_filename_safe(column));
        path.push(file_name);
        path
    }
}

pub(crate) trait Report {
    fn outliers(
        &self,
        report: &OutlierReport<'_>,
        context: &ReportContext,
        out: &mut dyn Write,
    ) -> Result<()>;
}

pub(crate) struct Reports {
    pub(crate) cli: CliReport,
    pub(crate) plot: PlotReport,
    pub(crate) json: Option<JsonReport>,
}

impl Reports {
    pub fn new(config: &Config) -> Reports {
        Reports {
            cli: CliReport::new(config.is_colored()),
            plot: PlotReport,
            json: if config.is_debug() {
                Some(JsonReport)
            } else {
                None
            },
        }
    }
}

impl Report for Reports {
    /// The listing must make it out, the figures are best effort
    fn outliers(
        &self,
        report: &OutlierReport<'_>,
        context: &ReportContext,
        out: &mut dyn Write,
    ) -> Result<()> {
        self.cli.outliers(report, context, out)?;
        log_if_err!(self.plot.outliers(report, context, out));
        if let Some(json) = &self.json {
            log_if_err!(json.outliers(report, context, out));
        }
        Ok(())
    }
}

pub(crate) struct CliReport {
    pub enable_text_coloring: bool,
}

impl CliReport {
    pub fn new(enable_text_coloring: bool) -> CliReport {
        CliReport {
            enable_text_coloring,
        }
    }

    fn with_color(&self, color: Color, s: &str) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetForegroundColor(color), s, ResetAttributes)
        } else {
            String::from(s)
        }
    }

    fn yellow(&self, s: &str) -> String {
        self.with_color(Color::DarkYellow, s)
    }

    fn red(&self, s: &str) -> String {
        self.with_color(Color::DarkRed, s)
    }

    fn bold(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Bold), s, ResetAttributes)
        } else {
            s
        }
    }

    fn faint(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Faint), s, ResetAttributes)
        } else {
            s
        }
    }

    pub fn summary(&self, report: &OutlierReport<'_>) -> String {
        let noutliers = report.count();
        let nrows = report.len();
        let fraction = if nrows == 0 {
            0.
        } else {
            noutliers as f64 / nrows as f64
        };

        let mut summary = self.yellow(&format!(
            "Found {} outliers among {} rows ({})",
            format::integer(noutliers),
            format::integer(nrows),
            format::percent(fraction)
        ));

        if let Some(fences) = report.fences() {
            summary.push('\n');
            summary.push_str(&self.faint(format!(
                "  fences: [{}, {}]",
                format::value(fences.lower),
                format::value(fences.upper)
            )));
        }

        summary
    }

    /// One line per flagged row (row index, value), then the column name and the count
    pub fn listing(&self, report: &OutlierReport<'_>) -> String {
        let outliers = report.outliers();
        let index_width = outliers
            .iter()
            .map(|(i, _)| i.to_string().len())
            .max()
            .unwrap_or(1);

        let mut listing = String::new();
        for (i, x) in &outliers {
            listing.push_str(&format!(
                "{:<width$}    {}\n",
                i,
                self.red(&format::exact(*x)),
                width = index_width
            ));
        }
        listing.push_str(&format!(
            "Name: {}, outliers: {}",
            self.bold(report.name().to_owned()),
            format::integer(outliers.len())
        ));

        listing
    }
}

impl Report for CliReport {
    fn outliers(
        &self,
        report: &OutlierReport<'_>,
        _: &ReportContext,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "{}", self.summary(report))?;
        writeln!(out, "{}", self.listing(report))?;
        Ok(())
    }
}

pub(crate) struct PlotReport;

impl Report for PlotReport {
    fn outliers(
        &self,
        report: &OutlierReport<'_>,
        context: &ReportContext,
        out: &mut dyn Write,
    ) -> Result<()> {
        let path = context.report_path(report.name(), "outliers.svg");
        plot::outliers_figure(&path, report, context.plot_size)?;

        tracing::info!("Wrote plot to {:?}", path);
        writeln!(out, "Plot saved to {}", path.display())?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Row {
    index: usize,
    value: f64,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    column: &'a str,
    rows: usize,
    lower_fence: Option<f64>,
    upper_fence: Option<f64>,
    outliers: Vec<Row>,
}

/// Dumps the report as JSON, for debugging
pub(crate) struct JsonReport;

impl Report for JsonReport {
    fn outliers(
        &self,
        report: &OutlierReport<'_>,
        context: &ReportContext,
        _: &mut dyn Write,
    ) -> Result<()> {
        let path = context.report_path(report.name(), "outliers.json");
        let snapshot = Snapshot {
            column: report.name(),
            rows: report.len(),
            lower_fence: report.fences().map(|f| f.lower),
            upper_fence: report.fences().map(|f| f.upper),
            outliers: report
                .outliers()
                .into_iter()
                .map(|(index, value)| Row { index, value })
                .collect(),
        };

        tracing::debug!("Writing report context to {:?}", path);
        fs::save(&snapshot, &path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stats::tukey;

    fn series() -> Series<f64> {
        Series::with_index(
            "MedHouseVal",
            vec![10, 11, 12, 13, 14, 15, 16],
            vec![
                Some(1.),
                Some(120.),
                Some(2.),
                None,
                Some(3.),
                Some(-80.),
                Some(4.),
            ],
        )
    }

    #[test]
    fn outliers_keep_order_and_index() {
        let series = series();
        let mask = OutlierMask::from(vec![false, true, false, false, false, true, false]);
        let report = OutlierReport::new(&series, &mask);

        assert_eq!(report.outliers(), vec![(11, 120.), (15, -80.)]);
        assert_eq!(report.count(), 2);
        assert_eq!(report.len(), 7);
    }

    #[test]
    fn partition_skips_missing_values() {
        let series = series();
        let mask = OutlierMask::from(vec![false, true, false, false, false, true, false]);
        let (outliers, rest) = OutlierReport::new(&series, &mask).partition();

        assert_eq!(outliers, vec![120., -80.]);
        assert_eq!(rest, vec![1., 2., 3., 4.]);
    }

    #[test]
    fn listing_without_colors() {
        let series = series();
        let mask = tukey::detect(&series, tukey::TUKEY_COEF);
        let report = OutlierReport::new(&series, &mask);
        let listing = CliReport::new(false).listing(&report);

        assert_eq!(
            listing,
            "11    120.0\n15    -80.0\nName: MedHouseVal, outliers: 2"
        );
    }

    #[test]
    fn listing_keeps_tiny_and_huge_values_readable() {
        let mut values = vec![1e-7; 6];
        values.extend_from_slice(&[3e-6, 123_456.7]);
        let series = Series::from_values("Tiny", &values);
        let mask = tukey::detect(&series, tukey::TUKEY_COEF);
        let report = OutlierReport::new(&series, &mask);

        assert_eq!(
            CliReport::new(false).listing(&report),
            "6    3e-6\n7    123456.7\nName: Tiny, outliers: 2"
        );
    }

    #[test]
    fn summary_without_colors() {
        let series = series();
        let fences = tukey::fences(&series, tukey::TUKEY_COEF);
        let mask = tukey::detect(&series, tukey::TUKEY_COEF);
        let report = OutlierReport::new(&series, &mask).with_fences(fences);

        assert_eq!(
            CliReport::new(false).summary(&report),
            "Found 2 outliers among 7 rows (28.57%)\n  fences: [-2.50000, 7.50000]"
        );
    }

    #[test]
    fn colored_listing_still_contains_values() {
        let series = series();
        let mask = tukey::detect(&series, tukey::TUKEY_COEF);
        let report = OutlierReport::new(&series, &mask);
        let listing = CliReport::new(true).listing(&report);

        assert!(listing.contains("120.0"));
        assert!(listing.contains("\u{1b}["));
    }

    #[test]
    fn report_paths_are_filename_safe() {
        let context = ReportContext {
            output_directory: PathBuf::from("out"),
            plot_size: (10, 10),
        };

        assert_eq!(
            context.report_path("a/b c", "outliers.svg"),
            PathBuf::from("out").join("a_b_c").join("outliers.svg")
        );
    }

    #[test]
    fn filename_truncated_on_char_boundary() {
        let name = "é".repeat(40);

        assert!(make_filename_safe(&name).len() <= MAX_FILE_NAME_LEN);
    }
}
