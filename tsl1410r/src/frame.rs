use crate::{
    error::Result,
    hal::SensorIo,
    sensor::Tsl1410r,
    stream::StreamCursor,
};

/// Amount of physical pixels on the array
pub const SENSOR_PIXEL_COUNT: usize = 1280;

/// Parameters of a single acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquisition {
    /// Amount of pixels sampled, `1..=SENSOR_PIXEL_COUNT`. Counts that divide
    /// the physical length evenly cover the whole array; other counts leave
    /// the last pixels beyond `n * stride` unsampled.
    pub n: usize,
    /// Extra light integration time on top of the fixed settle delay
    pub integrate_us: u32,
}

impl Default for Acquisition {
    fn default() -> Self {
        Acquisition {
            n: SENSOR_PIXEL_COUNT,
            integrate_us: 0,
        }
    }
}

/// Captured pixel intensities of one acquisition.
///
/// The buffer is immutable from the moment an acquisition completes until the
/// next `capture` overwrites it. A live [`StreamCursor`] borrows the pixels,
/// so capturing into a buffer that is still being streamed does not compile.
pub struct FrameBuffer {
    pix: [u16; SENSOR_PIXEL_COUNT],
    npix: usize,
}

impl FrameBuffer {
    pub const fn new() -> Self {
        FrameBuffer {
            pix: [0; SENSOR_PIXEL_COUNT],
            npix: 0,
        }
    }

    /// Run a blocking acquisition and store its samples here
    pub fn capture<IO: SensorIo>(
        &mut self,
        sensor: &mut Tsl1410r<IO>,
        acq: &Acquisition,
    ) -> Result<()> {
        sensor.read(&mut self.pix, acq.n, acq.integrate_us)?;
        self.npix = acq.n;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.npix
    }

    pub fn is_empty(&self) -> bool {
        self.npix == 0
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pix[..self.npix]
    }

    /// Start streaming the captured frame from pixel 0
    pub fn begin_stream(&self) -> StreamCursor<'_> {
        StreamCursor::new(self.pixels())
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer::new()
    }
}
