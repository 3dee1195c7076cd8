//! Recording line and delay mocks
//!
//! All mocks of one bus share a single event log so the order of line
//! changes and delays can be checked across lines.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ds1804_hal::{DelayNs, LineDirection, OutputLine};

/// Which control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Inc,
    Ud,
    Cs,
}

/// Something that happened on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Direction(Line, LineDirection),
    Level(Line, bool),
    DelayNs(u32),
}

/// Mock line failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFault;

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Output line that appends to the shared log
pub struct RecordingLine {
    line: Line,
    log: Log,
    /// Fail the nth level change (0-based) on this line
    fail_at: Option<usize>,
    writes: usize,
}

impl OutputLine for RecordingLine {
    type Error = LineFault;

    fn set_direction(&mut self, direction: LineDirection) -> Result<(), Self::Error> {
        self.log
            .borrow_mut()
            .push(Event::Direction(self.line, direction));
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        let n = self.writes;
        self.writes += 1;
        if self.fail_at == Some(n) {
            return Err(LineFault);
        }
        self.log.borrow_mut().push(Event::Level(self.line, high));
        Ok(())
    }
}

/// Delay that appends to the shared log
pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }
}

/// A full set of recording mocks sharing one log
pub struct Bus {
    pub log: Log,
    pub inc: RecordingLine,
    pub ud: RecordingLine,
    pub cs: RecordingLine,
    pub delay: RecordingDelay,
}

impl Bus {
    pub fn new() -> Self {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let line = |line| RecordingLine {
            line,
            log: log.clone(),
            fail_at: None,
            writes: 0,
        };
        Self {
            inc: line(Line::Inc),
            ud: line(Line::Ud),
            cs: line(Line::Cs),
            delay: RecordingDelay { log: log.clone() },
            log,
        }
    }

    /// Make the increment line fail on its nth level change
    pub fn fail_inc_at(mut self, n: usize) -> Self {
        self.inc.fail_at = Some(n);
        self
    }
}

/// Level changes of one line, in order
pub fn levels(log: &[Event], line: Line) -> Vec<bool> {
    log.iter()
        .filter_map(|e| match e {
            Event::Level(l, high) if *l == line => Some(*high),
            _ => None,
        })
        .collect()
}

/// Increment falling edges, with the U/D level in force at each
pub fn steps(log: &[Event]) -> Vec<bool> {
    let mut ud = true;
    let mut inc = true;
    let mut out = Vec::new();
    for e in log {
        match e {
            Event::Level(Line::Ud, high) => ud = *high,
            Event::Level(Line::Inc, high) => {
                if inc && !*high {
                    out.push(ud);
                }
                inc = *high;
            }
            _ => {}
        }
    }
    out
}

/// Sum of all delays in nanoseconds
pub fn total_delay_ns(log: &[Event]) -> u64 {
    log.iter()
        .map(|e| match e {
            Event::DelayNs(ns) => *ns as u64,
            _ => 0,
        })
        .sum()
}

/// Chip-select rising edges taken while increment is high
///
/// Each one starts an EEPROM store on the chip.
pub fn store_triggers(log: &[Event]) -> usize {
    let mut cs = true;
    let mut inc = true;
    let mut count = 0;
    for e in log {
        match e {
            Event::Level(Line::Cs, high) => {
                if !cs && *high && inc {
                    count += 1;
                }
                cs = *high;
            }
            Event::Level(Line::Inc, high) => inc = *high,
            _ => {}
        }
    }
    count
}
