//! Tukey's method
//!
//! The method uses two "fences" to classify the data. All the observations "inside" the fences
//! are considered "normal", and the rest are considered outliers.
//!
//! The fences are computed from the quartiles of the sample, according to the following formula:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles, k is the coefficient (classically 1.5)
//! let iqr = q3 - q1;  // The interquartile range
//! let (lower, upper) = (q1 - k * iqr, q3 + k * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < lower || x > upper;
//! ```
//!
//! A larger `k` pushes the fences apart and flags fewer points. With `k = 0` the fences are the
//! quartiles themselves.
//!
//! Some ASCII art for the visually oriented people:
//!
//! ``` ignore
//!       LOW              NORMAL                HIGH
//!     x   x  |  o o  o    o   o o  o  |   x      x
//!          lower                    upper
//!
//! Legend:
//! o: "normal" data (not an outlier)
//! x: outlier
//! ```
//!
//! A value sitting exactly on a fence is not an outlier. Missing values are never outliers.

use std::ops::{Deref, Index};

use crate::stats::float::Float;
use crate::stats::outliers::OutlierMask;
use crate::stats::series::{self, Series};

use self::Label::*;

/// The classical fence multiplier
pub const TUKEY_COEF: f64 = 1.5;

/// The `(lower, upper)` boundaries outside of which a value is an outlier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fences<A>
where
    A: Float,
{
    pub lower: A,
    pub upper: A,
}

impl<A> Fences<A>
where
    A: Float,
{
    /// Labels a single value against the fences
    pub fn label(&self, x: Option<A>) -> Label {
        match x {
            None => Missing,
            Some(x) if x < self.lower => Low,
            Some(x) if x > self.upper => High,
            Some(_) => NotAnOutlier,
        }
    }
}

/// A classified/labeled series.
///
/// The labels can be accessed using the indexing operator. The order of the data points is
/// retained.
#[derive(Clone, Copy)]
pub struct LabeledSeries<'a, A>
where
    A: Float,
{
    fences: Option<Fences<A>>,
    series: &'a Series<A>,
}

/// Number of data points per label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub low: usize,
    pub not_an_outlier: usize,
    pub high: usize,
    pub missing: usize,
}

impl Counts {
    pub fn outliers(&self) -> usize {
        self.low + self.high
    }
}

impl<'a, A> LabeledSeries<'a, A>
where
    A: Float,
{
    /// Returns the number of data points per label
    ///
    /// - Time: `O(length)`
    pub fn count(&self) -> Counts {
        let mut counts = Counts::default();

        for (_, _, label) in self {
            match label {
                Low => counts.low += 1,
                High => counts.high += 1,
                NotAnOutlier => counts.not_an_outlier += 1,
                Missing => counts.missing += 1,
            }
        }

        counts
    }

    /// Returns the fences used to classify the outliers, `None` when the series had no values
    /// to compute them from
    pub fn fences(&self) -> Option<Fences<A>> {
        self.fences
    }

    /// Returns an iterator over the labeled data
    pub fn iter(&self) -> Iter<'a, A> {
        Iter {
            fences: self.fences,
            iter: self.series.iter(),
        }
    }

    /// Collapses the labels into an outlier mask
    pub fn mask(&self) -> OutlierMask {
        self.iter()
            .map(|(_, _, label)| label.is_outlier())
            .collect::<Vec<_>>()
            .into()
    }

    fn label(&self, x: Option<A>) -> Label {
        match self.fences {
            Some(fences) => fences.label(x),
            // Nothing to compare against: every value is missing
            None => Missing,
        }
    }
}

impl<'a, A> Deref for LabeledSeries<'a, A>
where
    A: Float,
{
    type Target = Series<A>;

    fn deref(&self) -> &Series<A> {
        self.series
    }
}

impl<'a, A> Index<usize> for LabeledSeries<'a, A>
where
    A: Float,
{
    type Output = Label;

    fn index(&self, i: usize) -> &Label {
        static LOW: Label = Low;
        static HIGH: Label = High;
        static NOT_AN_OUTLIER: Label = NotAnOutlier;
        static MISSING: Label = Missing;

        match self.label(self.series.get(i)) {
            Low => &LOW,
            High => &HIGH,
            NotAnOutlier => &NOT_AN_OUTLIER,
            Missing => &MISSING,
        }
    }
}

impl<'a, A> IntoIterator for &LabeledSeries<'a, A>
where
    A: Float,
{
    type Item = (usize, Option<A>, Label);
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

/// Iterator over the labeled data, yields `(row index, value, label)`
pub struct Iter<'a, A>
where
    A: Float,
{
    fences: Option<Fences<A>>,
    iter: series::Iter<'a, A>,
}

impl<'a, A> Iterator for Iter<'a, A>
where
    A: Float,
{
    type Item = (usize, Option<A>, Label);

    fn next(&mut self) -> Option<(usize, Option<A>, Label)> {
        let fences = self.fences;

        self.iter.next().map(|(&i, &x)| {
            let label = match fences {
                Some(fences) => fences.label(x),
                None => Missing,
            };

            (i, x, label)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Labels used to classify outliers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    /// Below the lower fence
    Low,
    /// Above the upper fence
    High,
    /// A normal data point
    NotAnOutlier,
    /// No value to classify
    Missing,
}

impl Label {
    /// Checks if the data point has an "unusually" high value
    pub fn is_high(&self) -> bool {
        matches!(*self, High)
    }

    /// Checks if the data point has an "unusually" low value
    pub fn is_low(&self) -> bool {
        matches!(*self, Low)
    }

    /// Checks if the data point is labeled as an outlier
    pub fn is_outlier(&self) -> bool {
        matches!(*self, Low | High)
    }
}

/// Computes the fences of the series, `None` if it has no present values
///
/// # Panics
///
/// Panics if `coef` is negative or `NaN`
///
/// - Time: `O(N log N) where N = length`
pub fn fences<A>(series: &Series<A>, coef: A) -> Option<Fences<A>>
where
    A: Float,
{
    assert!(coef >= A::cast(0));

    let percentiles = series.percentiles();
    if percentiles.is_empty() {
        return None;
    }

    let (q1, _, q3) = percentiles.quartiles();
    let iqr = q3 - q1;

    Some(Fences {
        lower: q1 - coef * iqr,
        upper: q3 + coef * iqr,
    })
}

/// Classifies the series, and returns a labeled series.
///
/// # Panics
///
/// Panics if `coef` is negative or `NaN`
///
/// - Time: `O(N log N) where N = length`
pub fn classify<A>(series: &Series<A>, coef: A) -> LabeledSeries<'_, A>
where
    A: Float,
{
    LabeledSeries {
        fences: fences(series, coef),
        series,
    }
}

/// Flags the outliers of the series
///
/// The returned mask has one entry per value of `series`, in the same order. An empty series
/// gives an empty mask, and a series where every value is missing gives an all `false` mask.
///
/// # Panics
///
/// Panics if `coef` is negative or `NaN`
///
/// - Time: `O(N log N) where N = length`
pub fn detect<A>(series: &Series<A>, coef: A) -> OutlierMask
where
    A: Float,
{
    classify(series, coef).mask()
}
