use crate::{table::CalibrationTable, SCALE};

/// A straight line `pressure = slope * adc + intercept` fitted to a whole
/// calibration table by ordinary least squares.
///
/// `slope` is in scaled pressure per ADC count and `intercept` is a scaled
/// pressure. Both are truncated to integers.
///
/// # Examples
///
/// ```
/// use adc_pressure::{reference::REFERENCE_TABLE, LinearFit};
///
/// let fit = LinearFit::least_squares(&REFERENCE_TABLE);
///
/// assert_eq!(fit, LinearFit { slope: 6, intercept: 2056 });
/// assert_eq!(fit.evaluate(1000), 8056);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinearFit {
    pub slope: i64,
    pub intercept: i64,
}

impl LinearFit {
    /// Fits a line through every entry of `table`.
    ///
    /// Pressures are truncated to whole units before they are summed, and
    /// every sum is reduced to a per-point mean with integer division.
    /// Sums and products are carried in `i128`, so no table of `u16` ADC
    /// values and `i32` pressures can overflow them.
    ///
    /// Truncating the means can cancel the ADC variance of a table packed
    /// into a few low ADC counts, such as ADC values `0, 1, 2`. The line is
    /// then fitted from the raw sums instead, whose variance is non-zero
    /// for any two distinct ADC values.
    pub fn least_squares(table: &CalibrationTable) -> Self {
        let scale = i128::from(SCALE);

        let (mut sum_xy, mut sum_x, mut sum_y, mut sum_xx) = (0i128, 0i128, 0i128, 0i128);
        for entry in table.entries() {
            let x = i128::from(entry.adc);
            let y = i128::from(entry.pressure / SCALE);

            sum_xy += x * y;
            sum_x += x;
            sum_y += y;
            sum_xx += x * x;
        }

        let n = table.len() as i128;
        let (mean_xy, mean_x, mean_y, mean_xx) = (sum_xy / n, sum_x / n, sum_y / n, sum_xx / n);

        let variance = mean_xx - mean_x * mean_x;
        let (slope, intercept) = if variance != 0 {
            (
                (mean_xy - mean_x * mean_y) * scale / variance,
                (mean_xx * mean_y - mean_x * mean_xy) * scale / variance,
            )
        } else {
            let variance = n * sum_xx - sum_x * sum_x;
            (
                (n * sum_xy - sum_x * sum_y) * scale / variance,
                (sum_xx * sum_y - sum_x * sum_xy) * scale / variance,
            )
        };

        Self {
            slope: saturate(slope),
            intercept: saturate(intercept),
        }
    }

    /// Evaluates the line at `adc_reading`, as a scaled pressure.
    ///
    /// Values beyond `i64` saturate.
    pub fn evaluate(&self, adc_reading: i32) -> i64 {
        saturate(i128::from(self.slope) * i128::from(adc_reading) + i128::from(self.intercept))
    }
}

fn saturate(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CalibrationEntry;

    const LINEAR: [CalibrationEntry; 3] = [
        CalibrationEntry::new(10000, 100),
        CalibrationEntry::new(20000, 200),
        CalibrationEntry::new(30000, 300),
    ];

    static TABLE_LINEAR: CalibrationTable = CalibrationTable::new(&LINEAR);

    const OFFSET: [CalibrationEntry; 2] = [
        CalibrationEntry::new(-5000, 100),
        CalibrationEntry::new(5000, 300),
    ];

    static TABLE_OFFSET: CalibrationTable = CalibrationTable::new(&OFFSET);

    const FRACTIONAL: [CalibrationEntry; 4] = [
        CalibrationEntry::new(10050, 100),
        CalibrationEntry::new(20099, 200),
        CalibrationEntry::new(30000, 300),
        CalibrationEntry::new(40000, 400),
    ];

    static TABLE_FRACTIONAL: CalibrationTable = CalibrationTable::new(&FRACTIONAL);

    #[test]
    fn fits_line_through_origin() {
        assert_eq!(
            LinearFit::least_squares(&TABLE_LINEAR),
            LinearFit {
                slope: 100,
                intercept: 0
            }
        );
    }

    #[test]
    fn fits_negative_intercept() {
        let fit = LinearFit::least_squares(&TABLE_OFFSET);

        assert_eq!(
            fit,
            LinearFit {
                slope: 50,
                intercept: -10000
            }
        );
        assert_eq!(fit.evaluate(0), -10000);
        assert_eq!(fit.evaluate(500), 15000);
    }

    #[test]
    fn drops_fractional_pressure_before_fitting() {
        assert_eq!(
            LinearFit::least_squares(&TABLE_FRACTIONAL),
            LinearFit::least_squares(&TABLE_LINEAR)
        );
    }

    const LOW_ADC: [CalibrationEntry; 3] = [
        CalibrationEntry::new(0, 0),
        CalibrationEntry::new(100, 1),
        CalibrationEntry::new(200, 2),
    ];

    static TABLE_LOW_ADC: CalibrationTable = CalibrationTable::new(&LOW_ADC);

    const LOW_ADC_PAIR: [CalibrationEntry; 2] = [
        CalibrationEntry::new(0, 0),
        CalibrationEntry::new(100, 1),
    ];

    static TABLE_LOW_ADC_PAIR: CalibrationTable = CalibrationTable::new(&LOW_ADC_PAIR);

    const FULL_SPAN: [CalibrationEntry; 2] = [
        CalibrationEntry::new(-2_000_000_000, 0),
        CalibrationEntry::new(2_000_000_000, 65535),
    ];

    static TABLE_FULL_SPAN: CalibrationTable = CalibrationTable::new(&FULL_SPAN);

    const STEEP: [CalibrationEntry; 2] = [
        CalibrationEntry::new(-2_147_483_600, 0),
        CalibrationEntry::new(2_147_483_600, 2),
    ];

    static TABLE_STEEP: CalibrationTable = CalibrationTable::new(&STEEP);

    #[test]
    fn fits_low_adc_table_whose_truncated_means_have_no_variance() {
        let fit = LinearFit::least_squares(&TABLE_LOW_ADC);

        assert_eq!(
            fit,
            LinearFit {
                slope: 100,
                intercept: 0
            }
        );
        assert_eq!(fit.evaluate(5), 500);
        assert_eq!(fit.evaluate(-1), -100);

        assert_eq!(
            LinearFit::least_squares(&TABLE_LOW_ADC_PAIR),
            LinearFit {
                slope: 100,
                intercept: 0
            }
        );
    }

    #[test]
    fn fits_full_adc_and_pressure_span() {
        let fit = LinearFit::least_squares(&TABLE_FULL_SPAN);

        assert_eq!(
            fit,
            LinearFit {
                slope: 61034,
                intercept: -1999908450
            }
        );
        assert_eq!(fit.evaluate(65536), 2000015774);
        assert_eq!(fit.evaluate(i32::MAX), 131067517002548);
    }

    #[test]
    fn evaluates_steep_line_at_extreme_readings() {
        let fit = LinearFit::least_squares(&TABLE_STEEP);

        assert_eq!(
            fit,
            LinearFit {
                slope: 2147483600,
                intercept: -2147483600
            }
        );
        assert_eq!(fit.evaluate(i32::MAX), 4611685911053205600);
        assert_eq!(fit.evaluate(i32::MIN), -4611685917495656400);
    }

    #[test]
    fn evaluates_wide_readings() {
        let fit = LinearFit::least_squares(&TABLE_LINEAR);

        assert_eq!(fit.evaluate(i32::MAX), 100 * i64::from(i32::MAX));
        assert_eq!(fit.evaluate(i32::MIN), 100 * i64::from(i32::MIN));
    }
}
