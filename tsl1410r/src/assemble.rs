use crate::{
    error::{Error, Result},
    frame::SENSOR_PIXEL_COUNT,
    report::Report,
};

/// Host-side reconstruction of a streamed frame.
///
/// Chunks are placed at their declared starting index. The transport is
/// reliable and ordered, so a chunk that does not continue where the last
/// one ended means the sender and receiver disagree about the transfer and
/// the frame is rejected rather than patched. Interleaved state reports are
/// ignored.
#[derive(Debug)]
pub struct FrameAssembler {
    pix: [u16; SENSOR_PIXEL_COUNT],
    npix: usize,
    next: usize,
}

impl FrameAssembler {
    /// `npix` is the pixel count of the expected frame, negotiated out of
    /// band by whoever requested the exposure
    pub fn new(npix: usize) -> Result<Self> {
        if npix < 1 || npix > SENSOR_PIXEL_COUNT {
            return Err(Error::InvalidSampleCount(npix));
        }
        Ok(FrameAssembler {
            pix: [0; SENSOR_PIXEL_COUNT],
            npix,
            next: 0,
        })
    }

    /// Feed one decoded report. Exposure chunks advance the frame, state
    /// reports pass through untouched.
    pub fn accept(&mut self, report: &Report) -> Result<()> {
        match report {
            Report::Exposure(chunk) => self.place(usize::from(chunk.start), &chunk.pix),
            Report::State(_) => Ok(()),
        }
    }

    /// Place a chunk's pixels at `start`. Only the prefix that fits the
    /// expected frame is taken, dropping the final chunk's zero padding.
    pub fn place(&mut self, start: usize, pixels: &[u16]) -> Result<()> {
        if start >= self.npix {
            return Err(Error::ChunkOutOfBounds {
                start,
                npix: self.npix,
            });
        }
        if start != self.next {
            return Err(Error::OutOfOrderChunk {
                expected: self.next,
                got: start,
            });
        }
        let k = pixels.len().min(self.npix - start);
        self.pix[start..start + k].copy_from_slice(&pixels[..k]);
        self.next = start + k;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.next >= self.npix
    }

    /// Pixels received so far, in frame order
    pub fn pixels(&self) -> &[u16] {
        &self.pix[..self.next]
    }

    pub fn expected_len(&self) -> usize {
        self.npix
    }

    /// Drop all progress and wait for a fresh transfer from pixel 0
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ExposureChunk, StateReport, PIXELS_PER_REPORT};
    use claims::*;

    #[test]
    fn places_in_order_chunks_and_completes() {
        let mut asm = FrameAssembler::new(6).unwrap();
        assert_ok!(asm.place(0, &[1, 2, 3, 4]));
        assert!(!asm.is_complete());
        // Final chunk: 2 valid pixels, 2 slots of padding
        assert_ok!(asm.place(4, &[5, 6, 0, 0]));
        assert!(asm.is_complete());
        assert_eq!(asm.pixels(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rejects_out_of_order_chunks() {
        let mut asm = FrameAssembler::new(12).unwrap();
        assert_ok!(asm.place(0, &[0; PIXELS_PER_REPORT]));
        let err = asm.place(8, &[0; PIXELS_PER_REPORT]).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfOrderChunk {
                expected: 4,
                got: 8
            }
        ));
        // A repeated chunk is just as out of order
        assert_err!(asm.place(0, &[0; PIXELS_PER_REPORT]));
    }

    #[test]
    fn rejects_chunks_past_the_frame() {
        let mut asm = FrameAssembler::new(4).unwrap();
        assert_ok!(asm.place(0, &[1, 2, 3, 4]));
        let err = asm.place(4, &[9, 9, 9, 9]).unwrap_err();
        assert!(matches!(err, Error::ChunkOutOfBounds { start: 4, npix: 4 }));
    }

    #[test]
    fn state_reports_pass_through() {
        let mut asm = FrameAssembler::new(4).unwrap();
        assert_ok!(asm.accept(&Report::State(StateReport::default())));
        assert_ok!(asm.accept(&Report::Exposure(ExposureChunk {
            start: 0,
            pix: [5, 6, 7, 8],
        })));
        assert!(asm.is_complete());
        assert_eq!(asm.pixels(), &[5, 6, 7, 8]);
    }

    #[test]
    fn reset_restarts_the_transfer() {
        let mut asm = FrameAssembler::new(4).unwrap();
        assert_ok!(asm.place(0, &[1, 2, 3, 4]));
        asm.reset();
        assert!(!asm.is_complete());
        assert_ok!(asm.place(0, &[5, 6, 7, 8]));
        assert_eq!(asm.pixels(), &[5, 6, 7, 8]);
    }

    #[test]
    fn rejects_degenerate_frame_sizes() {
        assert_err!(FrameAssembler::new(0));
        assert_err!(FrameAssembler::new(SENSOR_PIXEL_COUNT + 1));
    }
}
