use std::cmp::Ordering;

use crate::stats::float::Float;

/// A "view" into the percentiles of a sample
///
/// Only the present values are kept, sorted in ascending order, so consecutive percentile
/// lookups are `O(1)`.
#[derive(Clone, Debug)]
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
{
    /// Sorts the values, discarding any `NaN`
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn new<I>(values: I) -> Percentiles<A>
    where
        I: IntoIterator<Item = A>,
    {
        let mut v = values
            .into_iter()
            .filter(|x| !x.is_nan())
            .collect::<Vec<_>>();

        // NB `NaN`s were filtered out above, the fallback never triggers
        v.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        Percentiles(v.into_boxed_slice())
    }

    /// Number of values the percentiles are computed from
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if there are no values to compute percentiles from
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sorted values
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }

    /// Returns the percentile at `p`%
    ///
    /// Interpolates linearly between the two closest ranks, with rank `p / 100 * (N - 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range or if there are no values
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);
        assert!(!self.0.is_empty());

        self.interpolate(p)
    }

    fn interpolate(&self, p: A) -> A {
        let len = self.0.len() - 1;
        let rank = (p / A::cast(100)) * A::cast(len);
        let integer = rank.floor();
        let fraction = rank - integer;
        let n = integer.to_usize().map_or(len, |n| n.min(len));
        let floor = self.0[n];

        match self.0.get(n + 1) {
            Some(&ceiling) => floor + (ceiling - floor) * fraction,
            // `p == 100`, or a single value
            None => floor,
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let (q1, _, q3) = self.quartiles();

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }
}
