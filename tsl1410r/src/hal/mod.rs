#[cfg(feature = "embedded-hal")]
pub(crate) mod embedded_hal;

use crate::{error::Result, sensor::Tsl1410r};

/// Hardware seam for the sensor: the two digital lines of the shift register
/// protocol, the analog output tap, and a blocking delay source.
///
/// A single implementation owns all four so the driver stays generic over one
/// parameter and tests can substitute a simulated sensor.
pub trait SensorIo {
    /// Drive the SI (start marker) line
    fn set_si(&mut self, high: bool) -> Result<()>;
    /// Drive the CLK (shift register clock) line
    fn set_clk(&mut self, high: bool) -> Result<()>;
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
    /// Sample the analog output of the currently addressed pixel
    fn sample(&mut self) -> Result<u16>;
    /// Native resolution of `sample` values, in bits
    fn resolution_bits(&self) -> u8;

    fn open_sensor(self) -> Tsl1410r<Self>
    where
        Self: Sized,
    {
        Tsl1410r::new(self)
    }
}

/// Analog sampling capability of a platform ADC channel.
///
/// `embedded-hal` 1.0 carries no ADC read trait, so adapters bring their own
/// analog source through this one.
pub trait AnalogSource {
    fn sample(&mut self) -> Result<u16>;
    fn resolution_bits(&self) -> u8;
}
