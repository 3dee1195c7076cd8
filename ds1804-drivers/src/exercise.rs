//! Bench exercise routine
//!
//! Walks the wiper through both terminals and a few absolute positions,
//! pausing at each so a meter across the divider can be read. Every stop is
//! recorded together with the voltage the meter should show.

use ds1804_core::traits::{DigitalPotentiometer, Direction};
use ds1804_hal::DelayNs;
use heapless::Vec;

use crate::divider::DividerEstimate;

/// Number of stops in one run
pub const MAX_READINGS: usize = 6;

/// Default pause at each stop, ms
pub const DEFAULT_DWELL_MS: u32 = 5_000;

/// Exercise stops, in the order they are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExerciseStage {
    /// Position before anything moved
    Initial,
    /// After `step_count` down steps
    Bottom,
    /// After `step_count` up steps
    Top,
    /// `move_to(0)`
    Min,
    /// `move_to(max / 2)`
    Mid,
    /// `move_to(max)`
    Max,
}

/// One recorded stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExerciseReading {
    /// Where in the routine this was taken
    pub stage: ExerciseStage,
    /// Tracked wiper resistance
    pub ohms: Option<u32>,
    /// Expected meter reading
    pub expected_mv: Option<u32>,
}

/// All stops of one run
pub type ExerciseReport = Vec<ExerciseReading, MAX_READINGS>;

/// Run the exercise
///
/// Establishes a reference first if the position is unknown. Stops at the
/// first driver error.
pub fn run<P, D>(
    pot: &mut P,
    delay: &mut D,
    divider: &DividerEstimate,
    dwell_ms: u32,
) -> Result<ExerciseReport, P::Error>
where
    P: DigitalPotentiometer,
    D: DelayNs,
{
    let mut report = ExerciseReport::new();

    if !pot.is_referenced() {
        pot.establish_reference()?;
    }
    record(&mut report, pot, divider, ExerciseStage::Initial);
    delay.delay_ms(dwell_ms);

    for (direction, stage) in [
        (Direction::Down, ExerciseStage::Bottom),
        (Direction::Up, ExerciseStage::Top),
    ] {
        for _ in 0..pot.step_count() {
            pot.step(direction)?;
        }
        record(&mut report, pot, divider, stage);
        delay.delay_ms(dwell_ms);
    }

    let max = pot.max_ohms();
    for (target, stage) in [
        (0, ExerciseStage::Min),
        (max / 2, ExerciseStage::Mid),
        (max, ExerciseStage::Max),
    ] {
        pot.move_to(target)?;
        record(&mut report, pot, divider, stage);
        delay.delay_ms(dwell_ms);
    }

    Ok(report)
}

fn record<P: DigitalPotentiometer>(
    report: &mut ExerciseReport,
    pot: &P,
    divider: &DividerEstimate,
    stage: ExerciseStage,
) {
    let ohms = pot.position_ohms();
    let reading = ExerciseReading {
        stage,
        ohms,
        expected_mv: ohms.map(|r| divider.output_mv(r)),
    };
    info!(
        "{}: {} ohms, meter should read {} mV",
        stage,
        reading.ohms,
        reading.expected_mv
    );
    // One slot per stage
    let _ = report.push(reading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds1804_core::traits::PotError;

    /// Potentiometer model without any lines
    struct MockPot {
        tap: Option<u8>,
        steps_sent: u32,
    }

    impl DigitalPotentiometer for MockPot {
        type Error = PotError<()>;

        fn step(&mut self, direction: Direction) -> Result<(), Self::Error> {
            self.steps_sent += 1;
            if let Some(tap) = self.tap.as_mut() {
                match direction {
                    Direction::Up if *tap < 100 => *tap += 1,
                    Direction::Down if *tap > 0 => *tap -= 1,
                    _ => {}
                }
            }
            Ok(())
        }

        fn move_to(&mut self, target_ohms: u32) -> Result<(), Self::Error> {
            let tap = self.tap.ok_or(PotError::UnknownPosition)?;
            let target = (target_ohms / 1000) as u8;
            self.steps_sent += tap.abs_diff(target) as u32;
            self.tap = Some(target);
            Ok(())
        }

        fn establish_reference(&mut self) -> Result<(), Self::Error> {
            self.steps_sent += 100;
            self.tap = Some(100);
            Ok(())
        }

        fn position_ohms(&self) -> Option<u32> {
            self.tap.map(|t| t as u32 * 1000)
        }

        fn max_ohms(&self) -> u32 {
            100_000
        }

        fn step_ohms(&self) -> u32 {
            1000
        }

        fn step_count(&self) -> u8 {
            100
        }
    }

    struct MockDelay {
        total_ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
        }
    }

    #[test]
    fn test_exercise_stops() {
        let mut pot = MockPot {
            tap: Some(40),
            steps_sent: 0,
        };
        let mut delay = MockDelay { total_ms: 0 };

        let report = run(&mut pot, &mut delay, &DividerEstimate::default(), 5).unwrap();

        let stops: std::vec::Vec<_> = report.iter().map(|r| (r.stage, r.ohms)).collect();
        assert_eq!(
            stops,
            [
                (ExerciseStage::Initial, Some(40_000)),
                (ExerciseStage::Bottom, Some(0)),
                (ExerciseStage::Top, Some(100_000)),
                (ExerciseStage::Min, Some(0)),
                (ExerciseStage::Mid, Some(50_000)),
                (ExerciseStage::Max, Some(100_000)),
            ]
        );
        assert_eq!(delay.total_ms, 30);
        // 100 + 100 sweeps, then 100 + 50 + 50 moves
        assert_eq!(pot.steps_sent, 400);
    }

    #[test]
    fn test_expected_voltages() {
        let mut pot = MockPot {
            tap: Some(100),
            steps_sent: 0,
        };
        let mut delay = MockDelay { total_ms: 0 };

        let report = run(&mut pot, &mut delay, &DividerEstimate::default(), 0).unwrap();

        assert_eq!(report[0].expected_mv, Some(1650));
        assert_eq!(report[1].expected_mv, Some(0));
        assert_eq!(report[4].expected_mv, Some(1100));
    }

    #[test]
    fn test_unknown_position_is_referenced_first() {
        let mut pot = MockPot {
            tap: None,
            steps_sent: 0,
        };
        let mut delay = MockDelay { total_ms: 0 };

        let report = run(&mut pot, &mut delay, &DividerEstimate::default(), 0).unwrap();

        assert_eq!(report[0].ohms, Some(100_000));
        assert_eq!(report.len(), MAX_READINGS);
    }
}
