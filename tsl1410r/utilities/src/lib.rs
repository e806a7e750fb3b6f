use mockall::mock;
use tsl1410r::{ReportBytes, ReportSink, SensorIo, SENSOR_PIXEL_COUNT};

/// Slope of the gradient profile, chosen so the brightest pixel stays a u16
pub const GRADIENT_STEP: u16 = 51;
/// Illuminated level of the shadow profile
pub const SHADOW_BRIGHT: u16 = 60_000;
/// Shadowed level of the shadow profile
pub const SHADOW_DARK: u16 = 1_500;

/// Fully dark array, what an unlit sensor integrates
pub fn dark_profile() -> [u16; SENSOR_PIXEL_COUNT] {
    [0; SENSOR_PIXEL_COUNT]
}

/// Linear ramp, pixel `k` integrates `GRADIENT_STEP * k`. Handy for
/// decimation checks since the expected value of any physical pixel is a
/// closed formula.
pub fn gradient_profile() -> [u16; SENSOR_PIXEL_COUNT] {
    core::array::from_fn(|k| GRADIENT_STEP * k as u16)
}

/// What the plunger actually casts on the array: lit up to the shadow edge,
/// dark past it. `fraction` is the plunger position over its full travel.
pub fn shadow_profile(fraction: f32) -> [u16; SENSOR_PIXEL_COUNT] {
    let edge = (fraction.clamp(0.0, 1.0) * SENSOR_PIXEL_COUNT as f32) as usize;
    core::array::from_fn(|k| if k < edge { SHADOW_BRIGHT } else { SHADOW_DARK })
}

/// Behavioral model of the TSL1410R shift register protocol.
///
/// A rising CLK edge while SI is high loads the start marker at pixel 0;
/// every further rising edge advances the addressed pixel by one. Sampling
/// past the end of the array reads dark, like the real part's output after
/// clocking through. The model keeps counters so tests can assert on the
/// protocol itself, not just the returned pixels.
pub struct SimSensor {
    profile: [u16; SENSOR_PIXEL_COUNT],
    addressed: Option<usize>,
    si: bool,
    clk: bool,
    clock_pulses: u64,
    elapsed_us: u64,
}

impl SimSensor {
    pub fn new(profile: [u16; SENSOR_PIXEL_COUNT]) -> Self {
        SimSensor {
            profile,
            addressed: None,
            si: false,
            clk: false,
            clock_pulses: 0,
            elapsed_us: 0,
        }
    }

    pub fn unlit() -> Self {
        SimSensor::new(dark_profile())
    }

    /// Currently addressed physical pixel, if a start marker was loaded
    pub fn addressed_pixel(&self) -> Option<usize> {
        self.addressed
    }

    /// The start marker was clocked past the last pixel
    pub fn is_flushed(&self) -> bool {
        matches!(self.addressed, Some(p) if p >= SENSOR_PIXEL_COUNT)
    }

    pub fn clock_pulses(&self) -> u64 {
        self.clock_pulses
    }

    /// Simulated time spent in `delay_us` so far
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }
}

impl SensorIo for SimSensor {
    fn set_si(&mut self, high: bool) -> tsl1410r::Result<()> {
        self.si = high;
        Ok(())
    }

    fn set_clk(&mut self, high: bool) -> tsl1410r::Result<()> {
        if high && !self.clk {
            self.clock_pulses += 1;
            self.addressed = if self.si {
                Some(0)
            } else {
                self.addressed.map(|p| p.saturating_add(1))
            };
        }
        self.clk = high;
        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += u64::from(us);
    }

    fn sample(&mut self) -> tsl1410r::Result<u16> {
        Ok(self
            .addressed
            .and_then(|p| self.profile.get(p).copied())
            .unwrap_or(0))
    }

    fn resolution_bits(&self) -> u8 {
        16
    }
}

/// Transport that keeps every report for later inspection
#[derive(Default)]
pub struct RecordingSink {
    pub reports: Vec<ReportBytes>,
}

impl ReportSink for RecordingSink {
    fn send(&mut self, report: &ReportBytes) -> tsl1410r::Result<()> {
        self.reports.push(*report);
        Ok(())
    }
}

mock! {
    pub Sink {}
    impl ReportSink for Sink {
        fn send(&mut self, report: &ReportBytes) -> tsl1410r::Result<()>;
    }
}

mock! {
    pub Io {}
    impl SensorIo for Io {
        fn set_si(&mut self, high: bool) -> tsl1410r::Result<()>;
        fn set_clk(&mut self, high: bool) -> tsl1410r::Result<()>;
        fn delay_us(&mut self, us: u32);
        fn sample(&mut self) -> tsl1410r::Result<u16>;
        fn resolution_bits(&self) -> u8;
    }
}
