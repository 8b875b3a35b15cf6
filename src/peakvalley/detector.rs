use alloc::vec::Vec;

use num_traits::Float;

use crate::common::SampleView;
use crate::peakvalley::tracker::{ExtremumKind, ExtremumTracker, CONFIRMATION_DELAY};

/// Extracts alternating peaks and valleys from a sample stream fed in
/// chunks of arbitrary size.
///
/// The detector keeps the tracker state and a global sample counter across
/// calls, so feeding a signal in a single call or split into chunks
/// produces the same extrema at the same stream indices. A confirmation
/// whose quiet gap spans a chunk boundary is reported by the later call;
/// it is never lost, duplicated or reordered.
///
/// A detector instance is not safe for concurrent use from multiple
/// threads. Callers sharing one must serialize access to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Detector<T> {
    tracker: ExtremumTracker<T>,
    samples_processed: usize,
}

impl<T: Float> Detector<T> {
    /// Creates a detector whose first chunk starts at stream index
    /// `base_samples`. Pass 0 for a stream starting at the origin.
    pub fn new(base_samples: usize) -> Self {
        Detector::from_options(base_samples, CONFIRMATION_DELAY)
    }

    /// Creates a detector with a custom confirmation delay. The default is
    /// [`CONFIRMATION_DELAY`].
    pub fn from_options(base_samples: usize, confirmation_delay: usize) -> Self {
        Detector {
            tracker: ExtremumTracker::with_confirmation_delay(confirmation_delay),
            samples_processed: base_samples,
        }
    }

    /// Processes the next chunk of the stream and returns the peak and
    /// valley indices confirmed while doing so, each list ordered by
    /// stream position.
    pub fn feed(&mut self, chunk: SampleView<T>) -> (Vec<usize>, Vec<usize>) {
        let mut peaks: Vec<usize> = Vec::new();
        let mut valleys: Vec<usize> = Vec::new();

        for (offset, value) in chunk.iter().enumerate() {
            let confirmed = self.tracker.step(value, self.samples_processed + offset);
            if let Some(extremum) = confirmed {
                match extremum.kind {
                    ExtremumKind::Peak => peaks.push(extremum.index),
                    ExtremumKind::Valley => valleys.push(extremum.index),
                }
            }
        }
        self.samples_processed += chunk.len();

        (peaks, valleys)
    }

    /// Discards all detector state and restarts the stream at
    /// `base_samples`, as if the detector had just been created. Any
    /// running candidate is lost.
    pub fn init(&mut self, base_samples: usize) {
        self.samples_processed = base_samples;
        self.tracker.reset();
    }

    /// Returns the number of samples consumed so far, including the base
    /// offset the stream started at.
    pub fn samples(&self) -> usize {
        self.samples_processed
    }
}

/// One-shot form of [`Detector`]: processes `samples` as a single chunk of
/// a stream starting at index `base_samples`.
pub fn peakvalley<T: Float>(
    samples: SampleView<T>,
    base_samples: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut detector = Detector::new(base_samples);
    detector.feed(samples)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{peakvalley, Detector};
    use crate::common::SampleView;

    /// A triangle wave starting at a trough, with troughs at multiples of
    /// `period` and crests halfway between them.
    fn triangle_wave(sample_count: usize, period: usize) -> Vec<f32> {
        (0..sample_count)
            .map(|i| {
                let phase = i % period;
                if phase < period / 2 {
                    phase as f32
                } else {
                    (period - phase) as f32
                }
            })
            .collect()
    }

    #[test]
    fn test_batch_extraction() {
        let samples = triangle_wave(300, 50);
        let (peaks, valleys) = peakvalley(SampleView::from(&samples[..]), 0);
        assert_eq!(peaks, vec![25, 75, 125, 175, 225, 275]);
        assert_eq!(valleys, vec![0, 50, 100, 150, 200, 250]);
    }

    #[test]
    fn test_base_samples_offsets_reported_indices() {
        let samples = triangle_wave(300, 50);
        let (peaks, valleys) = peakvalley(SampleView::from(&samples[..]), 1000);
        assert_eq!(peaks, vec![1025, 1075, 1125, 1175, 1225, 1275]);
        assert_eq!(valleys, vec![1000, 1050, 1100, 1150, 1200, 1250]);
    }

    #[test]
    fn test_short_input_confirms_nothing() {
        let samples = triangle_wave(300, 50);
        for length in 0..=16 {
            let (peaks, valleys) = peakvalley(SampleView::from(&samples[..length]), 0);
            assert!(peaks.is_empty());
            assert!(valleys.is_empty());
        }
    }

    #[test]
    fn test_constant_input_confirms_nothing() {
        let samples: Vec<f32> = vec![3.3; 200];
        let (peaks, valleys) = peakvalley(SampleView::from(&samples[..]), 0);
        assert!(peaks.is_empty());
        assert!(valleys.is_empty());
    }

    #[test]
    fn test_peak_index_matches_the_maximum() {
        // A pristine detector always confirms a valley first, so the
        // triangular excursion is preceded by a run that confirms the
        // valley at index 0 and flips the search to peaks.
        let mut samples: Vec<f32> = vec![0.0];
        samples.extend(core::iter::repeat(10.0).take(17));
        let excursion_start = samples.len();
        for value in (0..=8).chain((0..8).rev()) {
            samples.push(value as f32);
        }
        samples.extend(core::iter::repeat(0.0).take(20));

        let (peaks, valleys) = peakvalley(SampleView::from(&samples[..]), 0);
        assert_eq!(valleys, vec![0]);
        assert_eq!(peaks, vec![excursion_start + 8]);
    }

    #[test]
    fn test_chunked_feeding_matches_batch() {
        let samples = triangle_wave(300, 50);
        let (expected_peaks, expected_valleys) =
            peakvalley(SampleView::from(&samples[..]), 0);

        for chunk_size in [1, 7, 17, 50, 123, 300].iter() {
            let mut detector = Detector::new(0);
            let mut peaks: Vec<usize> = Vec::new();
            let mut valleys: Vec<usize> = Vec::new();
            for chunk in samples.chunks(*chunk_size) {
                let (p, v) = detector.feed(SampleView::from(chunk));
                peaks.extend(p);
                valleys.extend(v);
            }
            assert_eq!(peaks, expected_peaks);
            assert_eq!(valleys, expected_valleys);
            assert_eq!(detector.samples(), samples.len());
        }
    }

    #[test]
    fn test_confirmation_can_shift_into_a_later_call() {
        let samples = triangle_wave(300, 50);
        let mut detector = Detector::new(0);

        // The first valley needs 18 samples to confirm, so a 10 sample
        // chunk reports nothing and the confirmation moves to the next
        // call.
        let (peaks, valleys) = detector.feed(SampleView::from(&samples[..10]));
        assert!(peaks.is_empty());
        assert!(valleys.is_empty());

        let (_, valleys) = detector.feed(SampleView::from(&samples[10..]));
        assert_eq!(valleys[0], 0);
    }

    #[test]
    fn test_init_restarts_the_stream() {
        let samples = triangle_wave(300, 50);
        let (expected_peaks, expected_valleys) =
            peakvalley(SampleView::from(&samples[..]), 0);

        let mut detector = Detector::new(0);
        detector.feed(SampleView::from(&samples[..137]));

        detector.init(0);
        assert_eq!(detector.samples(), 0);
        let (peaks, valleys) = detector.feed(SampleView::from(&samples[..]));
        assert_eq!(peaks, expected_peaks);
        assert_eq!(valleys, expected_valleys);
    }

    #[test]
    fn test_samples_accounting() {
        let mut detector: Detector<f32> = Detector::new(5);
        assert_eq!(detector.samples(), 5);

        let chunk: Vec<f32> = vec![1.0, 2.0, 3.0];
        detector.feed(SampleView::from(&chunk[..]));
        assert_eq!(detector.samples(), 8);

        let empty: Vec<f32> = Vec::new();
        detector.feed(SampleView::from(&empty[..]));
        assert_eq!(detector.samples(), 8);

        detector.init(2);
        assert_eq!(detector.samples(), 2);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_detector_state_round_trip() {
        let samples = triangle_wave(300, 50);
        let mut detector = Detector::new(0);
        detector.feed(SampleView::from(&samples[..137]));

        let json = serde_json::to_string(&detector).unwrap();
        let mut restored: Detector<f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, detector);

        // The restored detector continues the stream where the original
        // left off.
        let expected = detector.feed(SampleView::from(&samples[137..]));
        let resumed = restored.feed(SampleView::from(&samples[137..]));
        assert_eq!(resumed, expected);
    }

    #[test]
    fn test_strided_chunk_matches_contiguous() {
        let samples = triangle_wave(300, 50);
        let mut interleaved: Vec<f32> = Vec::new();
        for value in samples.iter() {
            interleaved.push(*value);
            interleaved.push(-1.0);
        }

        let expected = peakvalley(SampleView::from(&samples[..]), 0);
        let strided = peakvalley(SampleView::new(&interleaved[..], 2), 0);
        assert_eq!(strided, expected);
    }
}
