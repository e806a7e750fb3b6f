use crate::{
    error::{Error, Result},
    frame::SENSOR_PIXEL_COUNT,
    hal::SensorIo,
};
use scopeguard::guard;

/// CLK high time per shift, in microseconds
const CLK_PULSE_US: u32 = 1;
/// Hold after loading the start marker, lets the analog output settle
const SETTLE_US: u32 = 20;

/// Driver for a TSL1410R-class linear photodiode array.
///
/// The sensor exposes its pixels through an internal shift register: a pulse
/// on SI loads a start marker, every CLK pulse afterwards advances the marker
/// by one pixel and routes that pixel's integrated charge to the analog
/// output. All sequencing here is blocking; the caller owns the timing budget.
pub struct Tsl1410r<IO>
where
    IO: SensorIo,
{
    io: IO,
}

impl<IO> Tsl1410r<IO>
where
    IO: SensorIo,
{
    pub fn new(io: IO) -> Self {
        Tsl1410r { io }
    }

    pub fn into_inner(self) -> IO {
        self.io
    }

    fn pulse_clk(&mut self) -> Result<()> {
        self.io.set_clk(true)?;
        self.io.delay_us(CLK_PULSE_US);
        self.io.set_clk(false)
    }

    /// Clock the start marker through the whole array, flushing residual
    /// charge and establishing a known exposure start. Idempotent.
    pub fn clear(&mut self) -> Result<()> {
        log::trace!("flushing {} pixel shift register", SENSOR_PIXEL_COUNT);
        let mut s = guard(self, |s| {
            let _ = s.io.set_si(false);
            let _ = s.io.set_clk(false);
        });
        s.io.set_si(true)?;
        s.pulse_clk()?;
        s.io.set_si(false)?;
        for _ in 0..SENSOR_PIXEL_COUNT {
            s.pulse_clk()?;
        }
        Ok(())
    }

    /// Capture `n` decimated samples into `pix[..n]`.
    ///
    /// Loads the start marker, holds for the settle delay plus `integrate_us`
    /// of extra light integration, then alternates sampling the addressed
    /// pixel with `stride` clock advances, `stride = SENSOR_PIXEL_COUNT / n`.
    /// Blocks for roughly `n * stride` clock pulses plus the integration hold.
    /// Both sensor lines are left low on every exit path.
    pub fn read(&mut self, pix: &mut [u16], n: usize, integrate_us: u32) -> Result<()> {
        if n < 1 || n > SENSOR_PIXEL_COUNT {
            return Err(Error::InvalidSampleCount(n));
        }
        if pix.len() < n {
            return Err(Error::PixelBufferTooSmall {
                need: n,
                got: pix.len(),
            });
        }
        let stride = SENSOR_PIXEL_COUNT / n;
        let bits = self.io.resolution_bits();
        log::debug!(
            "acquisition: n={} stride={} integrate_us={}",
            n,
            stride,
            integrate_us
        );

        let mut s = guard(self, |s| {
            let _ = s.io.set_si(false);
            let _ = s.io.set_clk(false);
        });

        // Inject the start marker and load it on one clock edge
        s.io.set_si(true)?;
        s.pulse_clk()?;
        s.io.set_si(false)?;
        // Analog settle, extended by the requested integration time
        s.io.delay_us(SETTLE_US.saturating_add(integrate_us));

        for slot in pix[..n].iter_mut() {
            let raw = s.io.sample()?;
            *slot = scale_sample(raw, bits);
            for _ in 0..stride {
                s.pulse_clk()?;
            }
        }
        Ok(())
    }
}

/// Rescale a raw ADC value to the full 16 bit output range, mapping the
/// ADC's full scale to 65535
pub(crate) fn scale_sample(raw: u16, bits: u8) -> u16 {
    if bits == 0 {
        return 0;
    }
    if bits >= 16 {
        return raw;
    }
    let max = (1u32 << bits) - 1;
    let raw = u32::from(raw).min(max);
    ((raw * 0xFFFF + max / 2) / max) as u16
}
