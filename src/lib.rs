//! Converts raw ADC readings from a pressure sensor into calibrated
//! pressures, using a static calibration table and fixed-point integer
//! arithmetic only.
//!
//! Pressures are represented scaled by [`SCALE`] (two decimal places).
//! Readings within the table are matched exactly or linearly interpolated
//! between the two closest entries. Readings outside it are extrapolated
//! from a least squares line through every entry.
//!
//! ```
//! use adc_pressure::{convert, reference::REFERENCE_TABLE};
//!
//! let pressure = convert(1800, &REFERENCE_TABLE);
//!
//! assert_eq!(pressure.scaled(), 10416);
//! assert_eq!(format!("{}", pressure), "104.16");
//! ```

#![cfg_attr(not(test), no_std)]

mod convert;
mod extrapolate;
mod interpolate;
mod log;
mod pressure;
pub mod reference;
mod sensor;
mod table;

pub use convert::{convert, convert_with_source, Conversion, Source};
pub use extrapolate::LinearFit;
pub use pressure::Pressure;
pub use sensor::PressureSensor;
pub use table::{CalibrationEntry, CalibrationTable};

/// Fixed-point scale factor applied to every pressure.
pub const SCALE: i32 = 100;
