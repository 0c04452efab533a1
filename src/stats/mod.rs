//! Statistics behind the outlier detection.
//!
//! Everything in here is pure: the inputs are borrowed, never mutated, and every result is
//! computed fresh on each call.

#[cfg(test)]
mod test;

pub mod outliers;

mod float;
mod percentiles;
mod series;

pub use self::float::Float;
pub use self::outliers::tukey::{self, Fences, Label, LabeledSeries, TUKEY_COEF};
pub use self::outliers::OutlierMask;
pub use self::percentiles::Percentiles;
pub use self::series::{Iter, Series};
