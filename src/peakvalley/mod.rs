//! Alternating peak/valley extraction for streamed sample sequences.
//!
//! The core is a debounced running extremum tracker: while seeking a peak
//! it follows the largest sample seen since the last confirmation and
//! confirms it once a fixed number of samples pass without the candidate
//! being matched or beaten, then switches to seeking a valley, and vice
//! versa. Confirmed peaks and valleys therefore strictly alternate.
//!
//! [`Detector`] carries the tracker state across calls so a long stream
//! can be fed in chunks of arbitrary size; [`peakvalley`] is the one-shot
//! batch form. Reported indices are always whole-stream coordinates.
//!
//! The extractor makes no judgement about what a reasonable peak rate is
//! for the signal at hand; it performs generic sequential extremum
//! detection with a fixed confirmation delay, nothing more.

mod detector;
mod tracker;

pub use detector::{peakvalley, Detector};
pub use tracker::{Extremum, ExtremumKind, ExtremumTracker, Mode, CONFIRMATION_DELAY};
