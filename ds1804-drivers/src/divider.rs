//! Voltage divider estimate
//!
//! Bench setups usually put the potentiometer under a fixed series resistor
//! between the supply and ground and measure across the wiper. Knowing the
//! tracked wiper resistance gives the voltage the meter should show.
//!
//! ```text
//!  Vsupply ── R_series ──┬── Vout
//!                        │
//!                      R_wiper
//!                        │
//!                       GND
//! ```

/// Series resistor of the usual bench divider (100 kΩ)
pub const BENCH_SERIES_OHMS: u32 = 100_000;

/// Divider made of a fixed series resistor and the wiper resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DividerEstimate {
    /// Supply voltage in millivolts
    pub supply_mv: u16,
    /// Series resistor between supply and wiper in ohms
    pub series_ohms: u32,
}

impl Default for DividerEstimate {
    fn default() -> Self {
        Self {
            supply_mv: 3300,
            series_ohms: BENCH_SERIES_OHMS,
        }
    }
}

impl DividerEstimate {
    /// Create a divider estimate
    pub fn new(supply_mv: u16, series_ohms: u32) -> Self {
        Self {
            supply_mv,
            series_ohms,
        }
    }

    /// Expected output in millivolts for a wiper resistance
    ///
    /// Vout = Vsupply * R_wiper / (R_series + R_wiper)
    pub fn output_mv(&self, wiper_ohms: u32) -> u32 {
        let total = self.series_ohms as u64 + wiper_ohms as u64;
        if total == 0 {
            return 0;
        }
        (self.supply_mv as u64 * wiper_ohms as u64 / total) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_divider() {
        let divider = DividerEstimate::default();

        assert_eq!(divider.output_mv(0), 0);
        // Equal halves
        assert_eq!(divider.output_mv(100_000), 1650);
        // 3300 * 50k / 150k
        assert_eq!(divider.output_mv(50_000), 1100);
    }

    #[test]
    fn test_no_series_resistor() {
        let divider = DividerEstimate::new(5000, 0);
        assert_eq!(divider.output_mv(0), 0);
        assert_eq!(divider.output_mv(10_000), 5000);
    }

    #[test]
    fn test_output_never_exceeds_supply() {
        let divider = DividerEstimate::new(u16::MAX, 1);
        assert!(divider.output_mv(u32::MAX) <= u16::MAX as u32);
    }
}
