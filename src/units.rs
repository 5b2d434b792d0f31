//! Conversions between millimeters and the host's distance unit.
//!
//! Every distance on the wire is a signed 64-bit count of nanometers.

/// Nanometers per millimeter.
pub const NM_PER_MM: f64 = 1_000_000.0;

/// Converts millimeters to nanometers, rounding to the nearest nanometer.
pub fn from_mm(mm: f64) -> i64 {
    (mm * NM_PER_MM).round() as i64
}

/// Converts nanometers to millimeters.
pub fn to_mm(nm: i64) -> f64 {
    nm as f64 / NM_PER_MM
}

#[cfg(test)]
mod tests {
    use super::{from_mm, to_mm};

    #[test]
    fn from_mm_scales_by_one_million() {
        assert_eq!(from_mm(1.0), 1_000_000);
        assert_eq!(from_mm(0.25), 250_000);
        assert_eq!(from_mm(-2.5), -2_500_000);
    }

    #[test]
    fn from_mm_rounds_instead_of_truncating() {
        // 0.1 * 1e6 is 99999.99999999999 in binary floating point.
        assert_eq!(from_mm(0.1), 100_000);
        assert_eq!(from_mm(0.3), 300_000);
    }

    #[test]
    fn nanometer_values_survive_a_round_trip() {
        for nm in [0_i64, 1, -1, 127_000, 1_000_000, -3_175_000, 2_147_483_647_000] {
            assert_eq!(from_mm(to_mm(nm)), nm);
        }
    }

    #[test]
    fn millimeter_values_survive_a_round_trip() {
        for mm in [0.1, 0.3, 1.27, -2.54, 1e-6, 25.4] {
            assert!((to_mm(from_mm(mm)) - mm).abs() < 1e-9, "{mm} drifted");
        }
    }
}
