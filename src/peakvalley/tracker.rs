use num_traits::Float;

/// The default number of samples a running extremum candidate must go
/// unbeaten before it is confirmed.
pub const CONFIRMATION_DELAY: usize = 16;

/// The kind of a confirmed extremum.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ExtremumKind {
    Peak,
    Valley,
}

/// A confirmed extremum. The index is a whole-stream coordinate, not an
/// offset into the chunk that happened to confirm it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Extremum {
    pub index: usize,
    pub kind: ExtremumKind,
}

/// Which kind of extremum the tracker is currently trying to confirm.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Mode {
    SeekingValley,
    SeekingPeak,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
struct Candidate<T> {
    value: T,
    index: usize,
}

/// A debounced running extremum tracker.
///
/// The tracker follows the best value seen since the last confirmation,
/// i.e the largest sample while seeking a peak and the smallest while
/// seeking a valley, and confirms it once the configured number of samples
/// has passed without the candidate being matched or beaten. Each
/// confirmation flips the search to the opposite kind, so confirmed kinds
/// strictly alternate, starting with a valley.
///
/// The tracker is a plain value: it can be cloned to snapshot the search
/// state, compared, and (with the `serialization` feature) serialized.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ExtremumTracker<T> {
    mode: Mode,
    candidate: Option<Candidate<T>>,
    confirmation_delay: usize,
}

impl<T: Float> ExtremumTracker<T> {
    pub fn new() -> Self {
        ExtremumTracker::with_confirmation_delay(CONFIRMATION_DELAY)
    }

    /// Creates a tracker with a custom confirmation delay. The default is
    /// [`CONFIRMATION_DELAY`].
    pub fn with_confirmation_delay(confirmation_delay: usize) -> Self {
        ExtremumTracker {
            mode: Mode::SeekingValley,
            candidate: None,
            confirmation_delay,
        }
    }

    /// Returns the kind of extremum the tracker is currently seeking.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the tracker to its pristine state, discarding any running
    /// candidate. The configured confirmation delay is kept.
    pub fn reset(&mut self) {
        self.mode = Mode::SeekingValley;
        self.candidate = None;
    }

    /// Processes one sample at stream index `index` and returns the
    /// extremum confirmed by it, if any. Indices must not decrease between
    /// consecutive calls.
    ///
    /// A value equal to the running candidate replaces it, so among equal
    /// extreme samples the latest one wins. A candidate that keeps being
    /// replaced, e.g by a constant signal, is never confirmed. After a
    /// confirmation the candidate is not cleared; it carries over and
    /// seeds the search for the opposite extremum.
    pub fn step(&mut self, value: T, index: usize) -> Option<Extremum> {
        let replaces_candidate = match (self.candidate, self.mode) {
            (None, _) => true,
            (Some(candidate), Mode::SeekingPeak) => value >= candidate.value,
            (Some(candidate), Mode::SeekingValley) => value <= candidate.value,
        };
        if replaces_candidate {
            self.candidate = Some(Candidate { value, index });
        }

        match self.candidate {
            Some(candidate) if index - candidate.index > self.confirmation_delay => {
                let kind = match self.mode {
                    Mode::SeekingPeak => ExtremumKind::Peak,
                    Mode::SeekingValley => ExtremumKind::Valley,
                };
                self.mode = match self.mode {
                    Mode::SeekingPeak => Mode::SeekingValley,
                    Mode::SeekingValley => Mode::SeekingPeak,
                };
                Some(Extremum {
                    index: candidate.index,
                    kind,
                })
            }
            _ => None,
        }
    }
}
