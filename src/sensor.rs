use crate::{
    convert::{convert_with_source, Conversion},
    log::debug,
    pressure::Pressure,
    table::CalibrationTable,
};
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};

/// A pressure sensor on an ADC channel, calibrated by a static table.
#[derive(Debug)]
pub struct PressureSensor<Pin, Word> {
    pin: Pin,
    table: &'static CalibrationTable,
    word: PhantomData<Word>,
}

impl<Pin, Word> PressureSensor<Pin, Word> {
    /// Returns a sensor reading from `pin` and converting through `table`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adc_pressure::{reference::REFERENCE_TABLE, PressureSensor};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let sensor = PressureSensor::new(pin, &REFERENCE_TABLE);
    /// # let sensor_u16: PressureSensor<MockChan0, u16> = sensor;
    /// ```
    pub fn new<ADC>(pin: Pin, table: &'static CalibrationTable) -> Self
    where
        Pin: Channel<ADC>,
    {
        Self {
            pin,
            table,
            word: PhantomData,
        }
    }

    /// Destroys the sensor and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    pub fn table(&self) -> &'static CalibrationTable {
        self.table
    }

    /// Reads the ADC once and converts the reading into a pressure.
    ///
    /// Readings outside the table are extrapolated, so every successful
    /// read yields a pressure. Errors from the ADC, including
    /// `nb::Error::WouldBlock`, are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use adc_pressure::{reference::REFERENCE_TABLE, PressureSensor, Source};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 1800)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut sensor = PressureSensor::new(pin, &REFERENCE_TABLE);
    ///
    /// // An ADC value of 1800 is 104.16
    /// let conversion = sensor.read(&mut adc).unwrap();
    /// assert_eq!(conversion.pressure.scaled(), 10416);
    /// assert_eq!(conversion.source, Source::Interpolated);
    /// ```
    pub fn read<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<Conversion, nb::Error<<Adc as OneShot<ADC, Word, Pin>>::Error>>
    where
        Word: Into<i32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let adc_reading: i32 = adc.read(&mut self.pin)?.into();
        debug!("read adc {}", adc_reading);

        Ok(convert_with_source(adc_reading, self.table))
    }

    /// Returns the pressure at the low end of the table, the smallest value
    /// [`read`](PressureSensor::read) returns without extrapolating.
    pub fn min_value(&self) -> Pressure {
        Pressure::from_scaled(self.table.first().pressure)
    }

    /// Returns the pressure at the high end of the table, the largest value
    /// [`read`](PressureSensor::read) returns without extrapolating.
    pub fn max_value(&self) -> Pressure {
        Pressure::from_scaled(self.table.last().pressure)
    }
}
