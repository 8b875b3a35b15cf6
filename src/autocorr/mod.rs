//! Windowed self-similarity profiling.
//!
//! The profile is based on mean absolute difference rather than the
//! product form of the textbook
//! [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation):
//! a score of zero means the trailing window and its lagged copy are
//! identical, and larger scores mean larger dissimilarity. For a periodic
//! signal the profile dips at lags that are multiples of the period, which
//! makes it a building block for rate estimation.

use alloc::vec::Vec;

use num_traits::Float;

use crate::common::SampleView;

/// Computes a lag indexed dissimilarity profile of `samples`.
///
/// For each lag `i` in `[min_lag, max_lag]`, the mean absolute difference
/// between the trailing `window_size` samples of the buffer and the window
/// shifted back by `i` samples is stored at profile index `i - min_lag`.
/// Only the trailing window is compared; the computation does not slide
/// over the rest of the buffer.
///
/// Both lag bounds are independently clamped to
/// `samples.len() - window_size` before use. There is no lower clamp and
/// no ordering check: a negative `min_lag` stays negative, and the clamp
/// can leave `max_lag < min_lag`, in which case the returned profile is
/// empty. Callers depend on this exact behavior, quirks included. Beyond
/// the clamp no bounds are enforced; a lag that addresses samples outside
/// the buffer (in particular any negative lag) panics.
///
/// Panics if `samples` is shorter than `window_size`.
pub fn auto_correlation<T: Float>(
    samples: SampleView<T>,
    min_lag: isize,
    max_lag: isize,
    window_size: usize,
) -> Vec<T> {
    let sample_count = samples.len();
    if sample_count < window_size {
        panic!("Buffer length must not be less than the window size")
    }

    let max_usable_lag = (sample_count - window_size) as isize;
    let min_lag = min_lag.min(max_usable_lag);
    let max_lag = max_lag.min(max_usable_lag);

    let mut profile = Vec::with_capacity((max_lag - min_lag + 1).max(0) as usize);
    let window_len = T::from(window_size).unwrap();

    for lag in min_lag..=max_lag {
        let mut sum = T::zero();
        for w in 0..window_size {
            let index = (sample_count - 1 - w) as isize;
            let value = samples.at(index as usize);
            let lagged = samples.at((index - lag) as usize);
            sum = sum + (value - lagged).abs();
        }
        profile.push(sum / window_len);
    }

    profile
}
