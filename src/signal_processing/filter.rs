/// Common trait for sample filters
///
/// Lets a host hold different filter configurations behind one seam.
pub trait SampleFilter {
    /// Process a single sample through the filter
    fn process(&mut self, sample: i16) -> i16;

    /// Process a buffer of samples in-place
    fn process_buffer(&mut self, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal_processing::{CoefficientSet, FixedPointFir};

    #[test]
    fn test_filter_behind_trait_object() {
        let coeffs = CoefficientSet::new(vec![0, 1], 1).unwrap();
        let mut filter: Box<dyn SampleFilter> = Box::new(FixedPointFir::new(coeffs));

        let mut buffer = [3i16, 5, -7, 9];
        filter.process_buffer(&mut buffer);
        assert_eq!(buffer, [0, 3, 5, -7]);
    }
}
