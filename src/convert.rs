use crate::{
    extrapolate::LinearFit,
    interpolate::{interpolate, search, Lookup},
    log::trace,
    pressure::Pressure,
    table::CalibrationTable,
};

/// How a [`Conversion`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    /// The reading matched a table entry.
    Exact,
    /// The reading fell between two adjacent table entries.
    Interpolated,
    /// The reading fell outside the table and was mapped through a least
    /// squares fit of the whole table.
    Extrapolated,
}

/// A converted pressure together with its [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Conversion {
    pub pressure: Pressure,
    pub source: Source,
}

/// Converts `adc_reading` into a pressure using `table`.
///
/// Readings within the table's ADC range are looked up exactly or linearly
/// interpolated between the two surrounding entries. Readings outside it are
/// extrapolated from a least squares fit of every entry.
///
/// # Examples
///
/// ```
/// use adc_pressure::{convert, reference::REFERENCE_TABLE};
///
/// assert_eq!(convert(1696, &REFERENCE_TABLE).scaled(), 10000);
/// assert_eq!(convert(1800, &REFERENCE_TABLE).scaled(), 10416);
/// assert_eq!(convert(20000, &REFERENCE_TABLE).scaled(), 122056);
/// ```
pub fn convert(adc_reading: i32, table: &CalibrationTable) -> Pressure {
    convert_with_source(adc_reading, table).pressure
}

/// Like [`convert`], but also reports whether the pressure was an exact
/// match, interpolated or extrapolated.
///
/// # Examples
///
/// ```
/// use adc_pressure::{convert_with_source, reference::REFERENCE_TABLE, Source};
///
/// let conversion = convert_with_source(1000, &REFERENCE_TABLE);
///
/// assert_eq!(conversion.pressure.scaled(), 8056);
/// assert_eq!(conversion.source, Source::Extrapolated);
/// ```
pub fn convert_with_source(adc_reading: i32, table: &CalibrationTable) -> Conversion {
    if table.contains(adc_reading) {
        match search(table, adc_reading) {
            Lookup::Exact(entry) => {
                trace!("adc {} matches table entry", adc_reading);
                Conversion {
                    pressure: Pressure::from_scaled(entry.pressure),
                    source: Source::Exact,
                }
            }
            Lookup::Between(low, high) => {
                trace!(
                    "adc {} between table adc {} and {}",
                    adc_reading,
                    low.adc,
                    high.adc
                );
                let pressure = interpolate(
                    i32::from(low.adc),
                    i32::from(high.adc),
                    low.pressure,
                    high.pressure,
                    adc_reading,
                );
                Conversion {
                    pressure: Pressure::from_scaled(pressure),
                    source: Source::Interpolated,
                }
            }
        }
    } else {
        let fit = LinearFit::least_squares(table);
        trace!(
            "adc {} outside table, slope {} intercept {}",
            adc_reading,
            fit.slope,
            fit.intercept
        );
        let pressure = fit
            .evaluate(adc_reading)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Conversion {
            pressure: Pressure::from_scaled(pressure),
            source: Source::Extrapolated,
        }
    }
}
