//! Digital potentiometer drivers

pub mod ds1804;

pub use ds1804::Ds1804;
