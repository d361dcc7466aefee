use crate::table::{CalibrationEntry, CalibrationTable};

/// Where a reading lies relative to the entries of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    Exact(CalibrationEntry),
    Between(CalibrationEntry, CalibrationEntry),
}

/// Narrows the table down to the entry matching `adc_reading`, or to the
/// two adjacent entries around it.
///
/// `adc_reading` must lie within the table's ADC range.
pub(crate) fn search(table: &CalibrationTable, adc_reading: i32) -> Lookup {
    let (first, last) = (table.first(), table.last());

    if adc_reading == i32::from(first.adc) {
        return Lookup::Exact(first);
    }
    if adc_reading == i32::from(last.adc) {
        return Lookup::Exact(last);
    }

    let entries = table.entries();
    let mut start = 0;
    let mut end = entries.len() - 1;

    loop {
        let mid = start + (end - start) / 2;
        let entry = entries[mid];
        let adc = i32::from(entry.adc);

        if adc == adc_reading {
            return Lookup::Exact(entry);
        } else if mid == start {
            return Lookup::Between(entries[start], entries[end]);
        } else if adc_reading < adc {
            end = mid;
        } else {
            start = mid;
        }
    }
}

/// Linear interpolation between `(x0, y0)` and `(x1, y1)`.
///
/// The slope is truncated before it is multiplied by the offset from `x0`,
/// so the result steps in multiples of `(y1 - y0) / (x1 - x0)`. The
/// arithmetic runs in `i64`. For `x0 <= x <= x1` the result lies between
/// `y0` and `y1` and always fits back into `i32`.
pub(crate) fn interpolate(x0: i32, x1: i32, y0: i32, y1: i32, x: i32) -> i32 {
    let (x0, x1, y0, y1, x) = (
        i64::from(x0),
        i64::from(x1),
        i64::from(y0),
        i64::from(y1),
        i64::from(x),
    );

    (y0 + ((y1 - y0) / (x1 - x0)) * (x - x0)) as i32
}
