use crate::SCALE;
use core::fmt;

/// A pressure in fixed-point form, scaled by [`SCALE`](crate::SCALE).
///
/// # Examples
///
/// ```
/// use adc_pressure::Pressure;
///
/// let pressure = Pressure::from_scaled(10416);
///
/// assert_eq!(pressure.whole(), 104);
/// assert_eq!(pressure.hundredths(), 16);
/// assert_eq!(format!("{}", pressure), "104.16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pressure(i32);

impl Pressure {
    pub const fn from_scaled(scaled: i32) -> Self {
        Self(scaled)
    }

    /// The raw value, in hundredths of a unit.
    pub const fn scaled(self) -> i32 {
        self.0
    }

    /// The integer part, truncated toward zero.
    pub const fn whole(self) -> i32 {
        self.0 / SCALE
    }

    /// The fractional part in hundredths of a unit, without sign.
    pub const fn hundredths(self) -> u32 {
        (self.0 % SCALE).unsigned_abs()
    }
}

impl From<i32> for Pressure {
    fn from(scaled: i32) -> Self {
        Self(scaled)
    }
}

impl From<Pressure> for i32 {
    fn from(pressure: Pressure) -> Self {
        pressure.0
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.whole().unsigned_abs(),
            self.hundredths()
        )
    }
}
