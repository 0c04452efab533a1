use rand::distributions::{Distribution, Standard};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Random vector of `size` elements, `None` when fewer than three would remain after `start`
pub fn vec<T>(size: usize, start: usize) -> Option<Vec<T>>
where
    Standard: Distribution<T>,
{
    if size > start + 2 {
        let mut rng = StdRng::from_entropy();

        Some((0..size).map(|_| rng.gen()).collect())
    } else {
        None
    }
}

/// Random vector with roughly one in ten entries knocked out as missing
pub fn vec_with_gaps<T>(size: usize, start: usize) -> Option<Vec<Option<T>>>
where
    Standard: Distribution<T>,
{
    vec::<T>(size, start).map(|v| {
        let mut rng = StdRng::from_entropy();

        v.into_iter()
            .map(|x| if rng.gen_ratio(1, 10) { None } else { Some(x) })
            .collect()
    })
}
