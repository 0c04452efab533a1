//! Scatter figure of a column with its outliers highlighted.

use std::fmt;
use std::path::Path;

use plotters::data::float::pretty_print_float;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::fs;
use crate::report::OutlierReport;

static DEFAULT_FONT: FontFamily = FontFamily::SansSerif;
static POINT_SIZE: u32 = 3;
static X_DESC: &str = "California block groups";

const DARK_BLUE: RGBColor = RGBColor(31, 120, 180);
const DARK_RED: RGBColor = RGBColor(227, 26, 28);

fn plot_error<E: fmt::Display>(path: &Path) -> impl Fn(E) -> Error + '_ {
    move |e| Error::PlotError {
        path: path.to_owned(),
        message: e.to_string(),
    }
}

/// Vertical range covering every value, padded so the extreme points are not cut in half
fn y_range(values: &[f64], rest: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .chain(rest)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        });

    if !min.is_finite() || !max.is_finite() {
        return (0., 1.);
    }

    let pad = if max > min { (max - min) * 0.05 } else { 1. };
    (min - pad, max + pad)
}

/// Draws the figure into an SVG file at `path`
///
/// Each group is laid out along its own `0..count` enumeration; the row index of the values is
/// not used.
pub(crate) fn outliers_figure(
    path: &Path,
    report: &OutlierReport<'_>,
    size: (u32, u32),
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::mkdirp(&parent)?;
    }

    let (outliers, rest) = report.partition();
    let x_max = outliers.len().max(rest.len()).max(1) as f64;
    let (y_min, y_max) = y_range(&outliers, &rest);

    let root_area = SVGBackend::new(path, size).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_error(path))?;

    let mut cb = ChartBuilder::on(&root_area);
    cb.caption(format!("IQR outliers: {}", report.name()), (DEFAULT_FONT, 20));

    let mut chart = cb
        .margin((5).percent())
        .set_label_area_size(LabelAreaPosition::Left, (5).percent_width().min(60))
        .set_label_area_size(LabelAreaPosition::Bottom, (5).percent_height().min(40))
        .build_cartesian_2d(-1.0..x_max, y_min..y_max)
        .map_err(plot_error(path))?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(report.name())
        .x_label_formatter(&|x| pretty_print_float(*x, false))
        .draw()
        .map_err(plot_error(path))?;

    chart
        .draw_series(
            rest.iter()
                .enumerate()
                .map(|(x, y)| Circle::new((x as f64, *y), POINT_SIZE, DARK_BLUE.filled())),
        )
        .map_err(plot_error(path))?;

    chart
        .draw_series(
            outliers
                .iter()
                .enumerate()
                .map(|(x, y)| Circle::new((x as f64, *y), POINT_SIZE, DARK_RED.filled())),
        )
        .map_err(plot_error(path))?
        .label("Outliers")
        .legend(|(x, y)| Circle::new((x + 10, y), POINT_SIZE, DARK_RED.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(plot_error(path))?;

    root_area.present().map_err(plot_error(path))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::y_range;

    #[test]
    fn range_is_padded() {
        assert_eq!(y_range(&[10.], &[0., 5.]), (-0.5, 10.5));
    }

    #[test]
    fn flat_range_is_widened() {
        assert_eq!(y_range(&[], &[3., 3.]), (2., 4.));
    }

    #[test]
    fn empty_range() {
        assert_eq!(y_range(&[], &[]), (0., 1.));
    }
}
