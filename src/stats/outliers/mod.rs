//! Classification of outliers
//!
//! WARNING: There's no formal/mathematical definition of what an outlier actually is. Therefore,
//! all outlier classifiers are *subjective*; the one provided here is the *de facto* standard
//! interquartile range rule.

pub mod tukey;

use std::ops::Index;
use std::slice;

/// Which entries of a series were classified as outliers
///
/// Aligned with the series it was computed from: `mask[i]` refers to the `i`th value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlierMask(Box<[bool]>);

impl OutlierMask {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries flagged as outliers
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&x| x).count()
    }

    /// Checks if at least one entry is flagged
    pub fn any(&self) -> bool {
        self.0.iter().any(|&x| x)
    }

    pub fn iter(&self) -> slice::Iter<'_, bool> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for OutlierMask {
    fn from(v: Vec<bool>) -> OutlierMask {
        OutlierMask(v.into_boxed_slice())
    }
}

impl Index<usize> for OutlierMask {
    type Output = bool;

    fn index(&self, i: usize) -> &bool {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a OutlierMask {
    type Item = &'a bool;
    type IntoIter = slice::Iter<'a, bool>;

    fn into_iter(self) -> slice::Iter<'a, bool> {
        self.iter()
    }
}
