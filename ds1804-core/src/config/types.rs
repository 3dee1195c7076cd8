//! Controller configuration
//!
//! Everything a board needs to describe one DS1804: which variant is fitted,
//! whether the wiper position is already known, the supply used for voltage
//! estimates and the pulse timing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::timing::PulseTiming;
use super::variant::Variant;

/// Default supply voltage in millivolts
pub const DEFAULT_SUPPLY_MV: u16 = 3300;

/// Upper bound for an encoded [`Ds1804Config`]
pub const MAX_ENCODED_LEN: usize = 48;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small
    BufferTooSmall,
    /// Stored bytes could not be decoded
    Deserialize,
}

/// DS1804 controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ds1804Config {
    /// Nominal resistance in kΩ (10, 50 or 100)
    pub max_kohm: u16,
    /// Known wiper resistance in ohms, `None` to establish a reference
    /// by driving the wiper to the top at construction
    pub initial_ohms: Option<u32>,
    /// Supply voltage in millivolts (voltage estimates only)
    pub supply_mv: u16,
    /// Pulse and store timing
    pub timing: PulseTiming,
}

impl Default for Ds1804Config {
    fn default() -> Self {
        Self {
            max_kohm: 100,
            initial_ohms: None,
            supply_mv: DEFAULT_SUPPLY_MV,
            timing: PulseTiming::default(),
        }
    }
}

impl Ds1804Config {
    /// Create a configuration for a variant with an unknown wiper position
    pub fn new(max_kohm: u16) -> Self {
        Self {
            max_kohm,
            ..Self::default()
        }
    }

    /// Set a known starting position in ohms
    pub fn with_initial_ohms(mut self, ohms: u32) -> Self {
        self.initial_ohms = Some(ohms);
        self
    }

    /// Set the supply voltage in millivolts
    pub fn with_supply_mv(mut self, supply_mv: u16) -> Self {
        self.supply_mv = supply_mv;
        self
    }

    /// Set the pulse timing
    pub fn with_timing(mut self, timing: PulseTiming) -> Self {
        self.timing = timing;
        self
    }

    /// The configured variant, if `max_kohm` names one
    pub fn variant(&self) -> Option<Variant> {
        Variant::from_kohm(self.max_kohm)
    }

    /// Encode as postcard binary data into `buf`
    ///
    /// Returns the used part of the buffer.
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::BufferTooSmall)
    }

    /// Decode from postcard binary data
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Ds1804Config::default();
        assert_eq!(config.variant(), Some(Variant::Ds1804_100));
        assert_eq!(config.initial_ohms, None);
        assert_eq!(config.supply_mv, 3300);
    }

    #[test]
    fn test_builder() {
        let config = Ds1804Config::new(50)
            .with_initial_ohms(25_000)
            .with_supply_mv(5000);
        assert_eq!(config.variant(), Some(Variant::Ds1804_050));
        assert_eq!(config.initial_ohms, Some(25_000));
        assert_eq!(config.supply_mv, 5000);
    }

    #[test]
    fn test_unsupported_variant() {
        assert_eq!(Ds1804Config::new(33).variant(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_storage() {
        let config = Ds1804Config::new(10).with_initial_ohms(4_200);
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let len = config.to_slice(&mut buf).unwrap().len();

        let decoded = Ds1804Config::from_bytes(&buf[..len]).unwrap();
        assert_eq!(decoded, config);

        let mut tiny = [0u8; 2];
        assert_eq!(config.to_slice(&mut tiny), Err(ConfigError::BufferTooSmall));
        assert_eq!(
            Ds1804Config::from_bytes(&[0xFF]),
            Err(ConfigError::Deserialize)
        );
    }
}
