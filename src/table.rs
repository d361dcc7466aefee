/// A single calibration point: a pressure and the ADC value the sensor
/// reports at that pressure.
///
/// `pressure` is scaled by [`SCALE`](crate::SCALE), so `10050` means
/// `100.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationEntry {
    pub pressure: i32,
    pub adc: u16,
}

impl CalibrationEntry {
    pub const fn new(pressure: i32, adc: u16) -> Self {
        Self { pressure, adc }
    }
}

/// An immutable calibration table, sorted ascending by both ADC value and
/// pressure.
///
/// The table borrows its entries for `'static` so it can live in flash
/// alongside the program rather than being copied into RAM.
///
/// # Examples
///
/// ```
/// use adc_pressure::{CalibrationEntry, CalibrationTable};
///
/// const ENTRIES: [CalibrationEntry; 3] = [
///     CalibrationEntry::new(10000, 1000), // 100.00 -> 1000
///     CalibrationEntry::new(20000, 2000), // 200.00 -> 2000
///     CalibrationEntry::new(30000, 3000), // 300.00 -> 3000
/// ];
///
/// static TABLE: CalibrationTable = CalibrationTable::new(&ENTRIES);
///
/// assert_eq!(TABLE.len(), 3);
/// assert_eq!(TABLE.adc_range(), (1000, 3000));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationTable {
    entries: &'static [CalibrationEntry],
}

// A table always holds at least two entries, so it is never empty.
#[allow(clippy::len_without_is_empty)]
impl CalibrationTable {
    /// Wraps `entries` as a calibration table.
    ///
    /// The entries must hold at least two points and be strictly
    /// ascending by both `adc` and `pressure`, or this function will panic
    /// when running in debug mode. In a `static` the check runs at compile
    /// time. Release builds do not check.
    pub const fn new(entries: &'static [CalibrationEntry]) -> Self {
        if cfg!(debug_assertions) {
            assert!(
                entries.len() >= 2,
                "A calibration table needs at least two entries"
            );

            let mut index = 1;
            while index < entries.len() {
                let (previous, current) = (entries[index - 1], entries[index]);
                assert!(
                    previous.adc < current.adc && previous.pressure < current.pressure,
                    "The entries in a calibration table must be in strictly ascending order"
                );
                index += 1;
            }
        }

        Self { entries }
    }

    pub const fn entries(&self) -> &'static [CalibrationEntry] {
        self.entries
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&'static CalibrationEntry> {
        self.entries.get(index)
    }

    /// The entry with the smallest ADC value.
    pub const fn first(&self) -> CalibrationEntry {
        self.entries[0]
    }

    /// The entry with the largest ADC value.
    pub const fn last(&self) -> CalibrationEntry {
        self.entries[self.entries.len() - 1]
    }

    /// The inclusive range of ADC values covered without extrapolation.
    pub const fn adc_range(&self) -> (u16, u16) {
        (self.first().adc, self.last().adc)
    }

    /// Returns `true` if `adc_reading` lies within the table's ADC range,
    /// boundaries included.
    pub fn contains(&self, adc_reading: i32) -> bool {
        let (low, high) = self.adc_range();
        adc_reading >= i32::from(low) && adc_reading <= i32::from(high)
    }
}
