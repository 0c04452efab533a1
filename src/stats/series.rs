use std::iter;
use std::slice;

use crate::stats::float::Float;
use crate::stats::percentiles::Percentiles;

/// A named column of numeric values, some of which may be missing
///
/// Every value keeps the row index it was read from, so results can be reported against the
/// original table. `NaN`s are stored as missing.
#[derive(Clone, Debug, PartialEq)]
pub struct Series<A>
where
    A: Float,
{
    name: String,
    index: Box<[usize]>,
    values: Box<[Option<A>]>,
}

impl<A> Series<A>
where
    A: Float,
{
    /// Creates a series indexed `0..values.len()`
    pub fn new<S>(name: S, values: Vec<Option<A>>) -> Series<A>
    where
        S: Into<String>,
    {
        let index = (0..values.len()).collect();

        Series::with_index(name, index, values)
    }

    /// Creates a series with an explicit row index
    ///
    /// # Panics
    ///
    /// Panics if `index` and `values` have different lengths
    pub fn with_index<S>(name: S, index: Vec<usize>, values: Vec<Option<A>>) -> Series<A>
    where
        S: Into<String>,
    {
        assert_eq!(index.len(), values.len());

        Series {
            name: name.into(),
            index: index.into_boxed_slice(),
            values: values
                .into_iter()
                .map(|x| x.filter(|x| !x.is_nan()))
                .collect(),
        }
    }

    /// Creates a series with no missing values (apart from `NaN`s)
    pub fn from_values<S>(name: S, values: &[A]) -> Series<A>
    where
        S: Into<String>,
    {
        Series::new(name, values.iter().map(|&x| Some(x)).collect())
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

    /// Returns the value at position `i`, `None` if it is missing
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds
    pub fn get(&self, i: usize) -> Option<A> {
        self.values[i]
    }

    /// Row labels, aligned with the values
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn values(&self) -> &[Option<A>] {
        &self.values
    }

    /// Iterates over `(row index, value)` pairs in order
    pub fn iter(&self) -> Iter<'_, A> {
        self.index.iter().zip(self.values.iter())
    }

    /// Iterates over the values that are not missing
    pub fn present(&self) -> impl Iterator<Item = A> + '_ {
        self.values.iter().filter_map(|&x| x)
    }

    /// Number of missing values
    pub fn missing(&self) -> usize {
        self.values.iter().filter(|x| x.is_none()).count()
    }

    /// Checks if every value is missing. Vacuously true for an empty series.
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Returns a "view" into the percentiles of the present values
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn percentiles(&self) -> Percentiles<A> {
        Percentiles::new(self.present())
    }
}

/// Iterator over the `(row index, value)` pairs of a series
pub type Iter<'a, A> = iter::Zip<slice::Iter<'a, usize>, slice::Iter<'a, Option<A>>>;
