//! Precomputed fixed-point band-pass coefficient tables.
//!
//! The tables were generated with WinFilter 0.8 (Butterworth band-pass
//! designs, 66 MHz sampling, coefficients quantized to 16 bits) and are
//! reproduced verbatim. The design metadata recorded here is documentary;
//! nothing parses or interprets it at runtime.

use crate::error::Result;
use crate::signal_processing::CoefficientSet;

/// Tap count shared by all three generated tables
pub const NUM_TAPS: usize = 31;

/// Gain divisor for the two non-degenerate tables (2^18)
pub const QUANTIZED_GAIN_DIVISOR: i32 = 262_144;

/// 0.05-1.95 MHz band-pass, Butterworth order 3.
///
/// Zeros at z = +/-1 (triple); poles on the real axis near z = 0.84..0.998
/// and at 0.904 +/- j0.147. Symmetric taps, linear phase.
pub const LOWBAND_3RD_ORDER_TAPS: [i16; NUM_TAPS] = [
    -565, 182, 1129, 2290, 3679, 5303, 7163, 9251, 11547, 14018, 16609, 19243, 21811, 24157,
    25979, 26878, 25979, 24157, 21811, 19243, 16609, 14018, 11547, 9251, 7163, 5303, 3679, 2290,
    1129, 182, -565,
];

/// 0.05-1.95 MHz band-pass, Butterworth order 6 — degenerate.
///
/// The generator's pole computation produced NaN for every pole of this run
/// and emitted an all-zero table with gain divisor 1. Kept verbatim as a
/// legitimate degenerate configuration; no alternative coefficients are
/// recoverable.
pub const LOWBAND_6TH_ORDER_TAPS: [i16; NUM_TAPS] = [0; NUM_TAPS];

/// 4.05-5.95 MHz band-pass, Butterworth order 6.
///
/// Zeros at z = +/-1 (sextuple); pole pairs at 0.833 +/- j0.390,
/// 0.807 +/- j0.425, 0.870 +/- j0.371, 0.802 +/- j0.472, 0.908 +/- j0.371,
/// 0.823 +/- j0.519. Symmetric taps, linear phase.
pub const HIGHBAND_6TH_ORDER_TAPS: [i16; NUM_TAPS] = [
    7701, 12028, 14003, 12797, 8322, 1342, -6642, -13727, -18080, -18427, -14436, -6856, 2618,
    11748, 18316, 20704, 18316, 11748, 2618, -6856, -14436, -18427, -18080, -13727, -6642, 1342,
    8322, 12797, 14003, 12028, 7701,
];

/// Coefficient set for the 0.05-1.95 MHz order-3 band-pass
pub fn lowband_3rd_order() -> Result<CoefficientSet> {
    CoefficientSet::new(LOWBAND_3RD_ORDER_TAPS.to_vec(), QUANTIZED_GAIN_DIVISOR)
}

/// Coefficient set for the degenerate all-zero 0.05-1.95 MHz order-6 table
pub fn lowband_6th_order() -> Result<CoefficientSet> {
    CoefficientSet::new(LOWBAND_6TH_ORDER_TAPS.to_vec(), 1)
}

/// Coefficient set for the 4.05-5.95 MHz order-6 band-pass
pub fn highband_6th_order() -> Result<CoefficientSet> {
    CoefficientSet::new(HIGHBAND_6TH_ORDER_TAPS.to_vec(), QUANTIZED_GAIN_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_construct() {
        for table in [lowband_3rd_order(), lowband_6th_order(), highband_6th_order()] {
            let set = table.unwrap();
            assert_eq!(set.num_taps(), NUM_TAPS);
        }
    }

    #[test]
    fn test_tables_are_symmetric() {
        // Linear-phase designs; symmetry is a property of the data, not
        // something the engine relies on.
        for taps in [
            LOWBAND_3RD_ORDER_TAPS,
            LOWBAND_6TH_ORDER_TAPS,
            HIGHBAND_6TH_ORDER_TAPS,
        ] {
            for n in 0..NUM_TAPS {
                assert_eq!(taps[n], taps[NUM_TAPS - 1 - n]);
            }
        }
    }
}
