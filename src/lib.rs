//! Numeric building blocks for rate analysis of one-dimensional sample
//! sequences, e.g. pulse sensor or audio signals:
//!
//! * A windowed self-similarity profile: the trailing window of a buffer is
//!   compared against lagged copies of itself, producing one dissimilarity
//!   score per lag. For periodic signals the profile dips at lags that are
//!   multiples of the period.
//! * A streamed peak/valley extractor: a debounced running extremum tracker
//!   that confirms alternating peaks and valleys and keeps its state across
//!   calls, so a long signal can be fed in chunks of arbitrary size.
//!
//! Features
//! * `no_std` compatible, suitable for embedded targets.
//! * No I/O and no internal threading; all calls complete in time linear
//!   in their input.
//! * Contiguous and strided input via [`common::SampleView`].
//! * Generic over the floating point sample type.
//!
//! # Examples
//!
//! Streaming API, for feeding a longer signal in chunks of arbitrary size.
//! Reported indices are whole-stream coordinates, not chunk offsets.
//!
//! ```
//! use micropulse::common::SampleView;
//! use micropulse::peakvalley::Detector;
//!
//! // A triangle wave with a period of 50 samples.
//! let samples: Vec<f32> = (0..300)
//!     .map(|i| {
//!         let phase = i % 50;
//!         if phase < 25 {
//!             phase as f32
//!         } else {
//!             (50 - phase) as f32
//!         }
//!     })
//!     .collect();
//!
//! let mut detector = Detector::new(0);
//! let mut peaks: Vec<usize> = Vec::new();
//! let mut valleys: Vec<usize> = Vec::new();
//! for chunk in samples.chunks(64) {
//!     let (p, v) = detector.feed(SampleView::from(chunk));
//!     peaks.extend(p);
//!     valleys.extend(v);
//! }
//!
//! assert_eq!(peaks, vec![25, 75, 125, 175, 225, 275]);
//! assert_eq!(valleys, vec![0, 50, 100, 150, 200, 250]);
//! ```
//!
//! One-shot API, used to profile the self-similarity of a single buffer.
//!
//! ```
//! use micropulse::autocorr::auto_correlation;
//! use micropulse::common::SampleView;
//!
//! let samples: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let profile = auto_correlation(SampleView::from(&samples[..]), 1, 3, 2);
//! assert_eq!(profile, vec![1.0, 2.0, 3.0]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod autocorr;
pub mod common;
pub mod peakvalley;
