//! DS1804 digital potentiometer
//!
//! The DS1804 is a 100-step potentiometer with a non-volatile wiper store,
//! controlled over three lines:
//!
//! - CS (chip-select, active low): the chip only listens while CS is low
//! - INC (increment): each falling edge moves the wiper one step
//! - U/D (up/down): level selects the step direction, high = up
//!
//! Raising CS while INC is low leaves the EEPROM alone; raising it while INC
//! is high starts a store. The step pulse therefore always releases CS
//! before INC, a failed pulse drops INC before releasing CS, and
//! [`NonVolatilePotentiometer::commit`] is the only place that stores.
//!
//! The chip cannot report its wiper position, so the driver tracks it. When
//! no starting position is given, construction drives the wiper to the top
//! terminal to get one.
//!
//! # Usage
//!
//! ```ignore
//! let config = Ds1804Config::new(100).with_initial_ohms(50_000);
//! let mut pot = Ds1804::new(config, inc, ud, cs, delay)?;
//!
//! pot.move_to(22_000)?;   // 28 steps down
//! pot.commit(22_000)?;    // survives power-down
//! ```

use ds1804_core::config::{Ds1804Config, PulseTiming, Variant};
use ds1804_core::state::{BusEvent, BusState};
use ds1804_core::traits::{
    DigitalPotentiometer, Direction, NonVolatilePotentiometer, PotError,
};
use ds1804_core::wiper::WiperTracker;
use ds1804_hal::{DelayNs, OutputLine};

use crate::divider::DividerEstimate;

/// DS1804 controller
///
/// Owns the three control lines and the delay for its whole lifetime. One
/// instance per physical chip.
pub struct Ds1804<INC, UD, CS, D> {
    inc: INC,
    ud: UD,
    cs: CS,
    delay: D,
    /// Tracked wiper position
    tracker: WiperTracker,
    /// Delays, already raised to the chip floors
    timing: PulseTiming,
    /// Supply voltage in millivolts
    supply_mv: u16,
    /// What the chip currently sees on CS
    state: BusState,
}

impl<INC, UD, CS, D, E> Ds1804<INC, UD, CS, D>
where
    INC: OutputLine<Error = E>,
    UD: OutputLine<Error = E>,
    CS: OutputLine<Error = E>,
    D: DelayNs,
{
    /// Create a controller and bring the lines to idle
    ///
    /// Fails with `InvalidVariant` or `OutOfRange` before touching any
    /// line. Without `initial_ohms` the wiper is driven to the top terminal,
    /// which takes `step_count` full step periods.
    pub fn new(
        config: Ds1804Config,
        inc: INC,
        ud: UD,
        cs: CS,
        delay: D,
    ) -> Result<Self, PotError<E>> {
        let variant = match config.variant() {
            Some(variant) => variant,
            None => {
                warn!("unsupported DS1804 variant: {} kohm", config.max_kohm);
                return Err(PotError::InvalidVariant);
            }
        };

        let tracker = match config.initial_ohms {
            Some(ohms) => WiperTracker::at_ohms(variant, ohms)?,
            None => WiperTracker::unknown(variant),
        };

        if !config.timing.is_within_limits() {
            warn!("pulse timing below datasheet minimums, raised");
        }

        let mut pot = Self {
            inc,
            ud,
            cs,
            delay,
            tracker,
            timing: config.timing.effective(),
            supply_mv: config.supply_mv,
            state: BusState::Idle,
        };

        // Give the chip time to recall its stored wiper
        pot.delay.delay_us(pot.timing.power_up_us);

        if let Err(e) = pot.init_lines() {
            return Err(pot.fault(e));
        }

        debug!(
            "{} ready, position {} ohms, {} us per step",
            variant.part_number(),
            pot.tracker.position_ohms(),
            pot.timing.step_period_us()
        );

        if !pot.tracker.is_known() {
            pot.establish_reference()?;
        }

        Ok(pot)
    }

    /// Chip variant
    pub fn variant(&self) -> Variant {
        self.tracker.variant()
    }

    /// Current bus state
    ///
    /// Always `Idle` between calls.
    pub fn state(&self) -> BusState {
        self.state
    }

    /// Effective pulse timing
    pub fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    /// Supply voltage in millivolts
    pub fn supply_mv(&self) -> u16 {
        self.supply_mv
    }

    /// Current wiper tap (0..=step_count), `None` if unknown
    pub fn tap(&self) -> Option<u8> {
        self.tracker.tap()
    }

    /// Expected wiper voltage with a series resistor to the supply
    ///
    /// `None` while the position is unknown.
    pub fn divider_mv(&self, series_ohms: u32) -> Option<u32> {
        let divider = DividerEstimate::new(self.supply_mv, series_ohms);
        self.tracker
            .position_ohms()
            .map(|ohms| divider.output_mv(ohms))
    }

    /// Give back the lines and the delay
    pub fn release(self) -> (INC, UD, CS, D) {
        (self.inc, self.ud, self.cs, self.delay)
    }

    /// Configure all lines as outputs and drive the idle levels
    fn init_lines(&mut self) -> Result<(), E> {
        self.cs.configure_output()?;
        self.inc.configure_output()?;
        self.ud.configure_output()?;

        // CS high first so INC and U/D changes are ignored
        self.cs.set_high()?;
        self.inc.set_high()?;
        self.ud.set_high()?;
        Ok(())
    }

    /// One increment pulse, without position bookkeeping
    fn pulse(&mut self, direction: Direction) -> Result<(), E> {
        debug_assert!(self.state.can_step());

        self.ud.set_level(direction.level())?;

        self.cs.set_low()?;
        self.state = self.state.transition(BusEvent::Select);
        self.delay.delay_us(self.timing.setup_us);

        // Falling edge moves the wiper
        self.inc.set_low()?;
        self.delay.delay_us(self.timing.hold_us);

        // Release CS while INC is still low: no store
        self.cs.set_high()?;
        self.inc.set_high()?;
        self.state = self.state.transition(BusEvent::Deselect);

        self.delay.delay_us(self.timing.settle_us);
        Ok(())
    }

    /// Store sequence: short CS pulse, then CS held low for the EEPROM write
    fn latch(&mut self) -> Result<(), E> {
        self.state = self.state.transition(BusEvent::BeginLatch);

        self.cs.set_low()?;
        self.delay.delay_ns(self.timing.latch_pulse_ns);
        self.cs.set_high()?;
        self.delay.delay_ns(self.timing.latch_pulse_ns);

        self.cs.set_low()?;
        self.delay.delay_ms(self.timing.store_ms);
        self.cs.set_high()?;

        self.state = self.state.transition(BusEvent::LatchComplete);
        Ok(())
    }

    /// Send `count` steps in one direction
    fn repeat(&mut self, direction: Direction, count: u32) -> Result<(), PotError<E>> {
        for _ in 0..count {
            self.step(direction)?;
        }
        Ok(())
    }

    /// Handle a line failure
    ///
    /// The pulse may or may not have reached the chip, so the tracked
    /// position is dropped. Idle levels are restored as far as the lines
    /// allow.
    fn fault(&mut self, err: E) -> PotError<E> {
        warn!("control line failed, wiper position is now unknown");
        self.tracker.invalidate();
        // INC low before CS rises, or the release starts a store
        if self.inc.set_low().is_ok() {
            let _ = self.cs.set_high();
            let _ = self.inc.set_high();
        }
        let _ = self.ud.set_high();
        self.state = self.state.transition(BusEvent::Fault);
        PotError::Line(err)
    }
}

impl<INC, UD, CS, D, E> DigitalPotentiometer for Ds1804<INC, UD, CS, D>
where
    INC: OutputLine<Error = E>,
    UD: OutputLine<Error = E>,
    CS: OutputLine<Error = E>,
    D: DelayNs,
{
    type Error = PotError<E>;

    fn step(&mut self, direction: Direction) -> Result<(), Self::Error> {
        if let Err(e) = self.pulse(direction) {
            return Err(self.fault(e));
        }
        self.tracker.record_step(direction);
        trace!("step {}, tap {}", direction, self.tracker.tap());
        Ok(())
    }

    fn move_to(&mut self, target_ohms: u32) -> Result<(), Self::Error> {
        let plan = match self.tracker.plan_move(target_ohms) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("move to {} ohms rejected: {}", target_ohms, e);
                return Err(e.into());
            }
        };

        if plan.is_empty() {
            trace!("already at {} ohms", target_ohms);
            return Ok(());
        }

        debug!(
            "move to {} ohms: {} steps {}",
            target_ohms,
            plan.steps,
            plan.direction
        );
        self.repeat(plan.direction, plan.steps)
    }

    fn establish_reference(&mut self) -> Result<(), Self::Error> {
        let steps = self.tracker.variant().step_count() as u32;
        self.repeat(Direction::Up, steps)?;
        self.tracker.set_top();
        debug!("wiper referenced at top, {} ohms", self.tracker.position_ohms());
        Ok(())
    }

    fn position_ohms(&self) -> Option<u32> {
        self.tracker.position_ohms()
    }

    fn max_ohms(&self) -> u32 {
        self.tracker.variant().max_ohms()
    }

    fn step_ohms(&self) -> u32 {
        self.tracker.variant().step_ohms()
    }

    fn step_count(&self) -> u8 {
        self.tracker.variant().step_count()
    }
}

impl<INC, UD, CS, D, E> NonVolatilePotentiometer for Ds1804<INC, UD, CS, D>
where
    INC: OutputLine<Error = E>,
    UD: OutputLine<Error = E>,
    CS: OutputLine<Error = E>,
    D: DelayNs,
{
    fn commit(&mut self, target_ohms: u32) -> Result<(), Self::Error> {
        let descent = match self.tracker.descent_from_top(target_ohms) {
            Ok(steps) => steps,
            Err(e) => {
                warn!("store of {} ohms rejected: {}", target_ohms, e);
                return Err(e.into());
            }
        };

        // Top terminal first: corrects any drift between model and wiper
        self.establish_reference()?;
        self.repeat(Direction::Down, descent)?;

        if let Err(e) = self.latch() {
            return Err(self.fault(e));
        }

        info!(
            "stored wiper at {} ohms ({})",
            self.tracker.position_ohms(),
            self.variant().part_number()
        );
        Ok(())
    }
}
