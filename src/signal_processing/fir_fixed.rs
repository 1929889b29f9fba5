use crate::error::{FirError, Result};
use crate::signal_processing::SampleFilter;

/// A quantized FIR tap set with its fixed-point scale factor.
///
/// Holds the signed 16-bit tap weights and the gain divisor (the integer the
/// raw accumulated sum is divided by to bring passband gain back to
/// approximately unity). Both are fixed at construction; validation happens
/// here so the per-sample path never has to check anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientSet {
    taps: Vec<i16>,
    gain_divisor: i32,
}

impl CoefficientSet {
    /// Create a validated coefficient set
    ///
    /// # Errors
    /// Returns `FirError::EmptyCoefficients` for an empty tap list and
    /// `FirError::InvalidGainDivisor` for a divisor below 1. Divisor 1 is
    /// legal (the degenerate all-zero table uses it).
    pub fn new(taps: Vec<i16>, gain_divisor: i32) -> Result<Self> {
        if taps.is_empty() {
            return Err(FirError::EmptyCoefficients);
        }
        if gain_divisor < 1 {
            return Err(FirError::InvalidGainDivisor(gain_divisor));
        }
        Ok(Self { taps, gain_divisor })
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &[i16] {
        &self.taps
    }

    /// Get the gain divisor
    pub fn gain_divisor(&self) -> i32 {
        self.gain_divisor
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        (self.taps.len() - 1) / 2
    }
}

/// Fixed-point FIR filter
///
/// Owns a coefficient set and a delay line of the last N input samples. Each
/// call to [`process`](FixedPointFir::process) accepts one sample and returns
/// one filtered sample: the dot product of the taps with the history, divided
/// by the gain divisor with truncation toward zero.
///
/// The delay line is a ring buffer with a write index; the input/output
/// mapping is identical to a direct-form shift register, including the
/// implicit all-zero history at startup.
pub struct FixedPointFir {
    coefficients: CoefficientSet,
    delay_line: Vec<i16>,
    pos: usize,
}

impl FixedPointFir {
    /// Create a new filter with a zeroed delay line
    pub fn new(coefficients: CoefficientSet) -> Self {
        Self {
            delay_line: vec![0; coefficients.num_taps()],
            coefficients,
            pos: 0,
        }
    }

    /// Process a single sample through the filter
    ///
    /// The accumulator is 64-bit, wide enough that the sum of i16 x i16
    /// products cannot overflow for any tap count that fits in memory. The
    /// final divide truncates toward zero, matching the fixed-point
    /// quantization the tables were designed for; the quotient is narrowed to
    /// i16 with wrapping semantics, so a misconfigured gain divisor shows up
    /// as wraparound rather than a per-sample error.
    pub fn process(&mut self, sample: i16) -> i16 {
        self.delay_line[self.pos] = sample;

        let taps = self.coefficients.taps();
        let n = taps.len();
        let mut acc = 0i64;

        // Iterate the ring buffer in two contiguous reverse ranges so tap 0
        // always meets the newest sample without modulo arithmetic.
        let mut tap_i = 0usize;
        for delay_idx in (0..=self.pos).rev() {
            acc += taps[tap_i] as i64 * self.delay_line[delay_idx] as i64;
            tap_i += 1;
        }
        for delay_idx in ((self.pos + 1)..n).rev() {
            acc += taps[tap_i] as i64 * self.delay_line[delay_idx] as i64;
            tap_i += 1;
        }
        debug_assert_eq!(tap_i, n);

        self.pos += 1;
        if self.pos == n {
            self.pos = 0;
        }
        (acc / self.coefficients.gain_divisor() as i64) as i16
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Zero the delay line, returning the filter to its startup state
    pub fn reset(&mut self) {
        self.delay_line.fill(0);
        self.pos = 0;
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.coefficients.num_taps()
    }

    /// Get the group delay in samples
    pub fn group_delay_samples(&self) -> usize {
        self.coefficients.group_delay_samples()
    }

    /// Get access to the coefficient set
    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }
}

impl SampleFilter for FixedPointFir {
    fn process(&mut self, sample: i16) -> i16 {
        FixedPointFir::process(self, sample)
    }
}
