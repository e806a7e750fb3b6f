use super::{AnalogSource, SensorIo};
use crate::error::{Error, Result};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Adapts a pair of `embedded-hal` output pins, a delay source and an analog
/// source into the driver's `SensorIo` seam.
pub struct EmbeddedHalIo<SI, CLK, A, D> {
    si: SI,
    clk: CLK,
    adc: A,
    delay: D,
}

impl<SI, CLK, A, D> EmbeddedHalIo<SI, CLK, A, D>
where
    SI: OutputPin,
    CLK: OutputPin,
    A: AnalogSource,
    D: DelayNs,
{
    pub fn new(si: SI, clk: CLK, adc: A, delay: D) -> Self {
        EmbeddedHalIo { si, clk, adc, delay }
    }
}

impl<SI, CLK, A, D> SensorIo for EmbeddedHalIo<SI, CLK, A, D>
where
    SI: OutputPin,
    CLK: OutputPin,
    A: AnalogSource,
    D: DelayNs,
{
    fn set_si(&mut self, high: bool) -> Result<()> {
        let res = if high {
            self.si.set_high()
        } else {
            self.si.set_low()
        };
        res.map_err(|_| Error::Pin)
    }

    fn set_clk(&mut self, high: bool) -> Result<()> {
        let res = if high {
            self.clk.set_high()
        } else {
            self.clk.set_low()
        };
        res.map_err(|_| Error::Pin)
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn sample(&mut self) -> Result<u16> {
        self.adc.sample()
    }

    fn resolution_bits(&self) -> u8 {
        self.adc.resolution_bits()
    }
}
