use crate::{
    error::{Error, Result},
    report::{encode_exposure, ReportBytes, StateReport, PIXELS_PER_REPORT},
};

/// Atomic fixed-size packet send primitive, shared between state reports and
/// exposure reports. One `send` delivers one complete report as an
/// indivisible unit; delivery is assumed reliable and in order.
pub trait ReportSink {
    fn send(&mut self, report: &ReportBytes) -> Result<()>;
}

/// Progress marker of one frame's chunked transfer.
///
/// The cursor borrows the frame's pixels for its whole lifetime, so the
/// buffer cannot be overwritten by a new acquisition while the transfer is
/// in flight. It is owned by the caller driving the transfer loop: a
/// transfer either runs to completion or the cursor is `reset` before reuse.
#[derive(Debug)]
pub struct StreamCursor<'a> {
    pix: &'a [u16],
    idx: usize,
}

impl<'a> StreamCursor<'a> {
    pub fn new(pix: &'a [u16]) -> Self {
        StreamCursor { pix, idx: 0 }
    }

    /// Rebuild a cursor from an externally persisted progress marker.
    ///
    /// `idx` is taken as-is; a marker past the end of the frame is caught,
    /// clamped and reported by the next chunk send.
    pub fn resume_at(pix: &'a [u16], idx: usize) -> Self {
        StreamCursor { pix, idx }
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn npix(&self) -> usize {
        self.pix.len()
    }

    pub fn remaining(&self) -> usize {
        self.pix.len().saturating_sub(self.idx)
    }

    pub fn is_done(&self) -> bool {
        self.idx >= self.pix.len()
    }

    /// Restart the transfer from pixel 0
    pub fn reset(&mut self) {
        self.idx = 0;
    }
}

/// Serializes a captured frame into exposure reports, one report per call,
/// over the same sink that carries ordinary state reports.
///
/// Because both report kinds share one transport, the orchestrator should
/// alternate `send_next_chunk` with `send_state` across loop iterations
/// instead of draining a whole frame in one burst, keeping the latency added
/// to state reporting bounded.
pub struct FrameStreamer<TX>
where
    TX: ReportSink,
{
    tx: TX,
}

impl<TX> FrameStreamer<TX>
where
    TX: ReportSink,
{
    pub fn new(tx: TX) -> Self {
        FrameStreamer { tx }
    }

    pub fn into_inner(self) -> TX {
        self.tx
    }

    /// Send one state report
    pub fn send_state(&mut self, state: &StateReport) -> Result<()> {
        self.tx.send(&state.encode())
    }

    /// Send the next exposure chunk of the frame under `cursor`.
    ///
    /// Sends at most one report carrying `min(remaining, PIXELS_PER_REPORT)`
    /// pixels and advances the cursor by that amount; the caller detects
    /// completion with [`StreamCursor::is_done`]. Once the cursor is done
    /// the call is a no-op. A rejected send surfaces as `Transport` without
    /// advancing the cursor; chunks are never retried or skipped silently.
    pub fn send_next_chunk(&mut self, cursor: &mut StreamCursor<'_>) -> Result<()> {
        let npix = cursor.pix.len();
        if cursor.idx > npix {
            // Caller resumed past the end. Clamp so the transfer reads as
            // complete and no out-of-bounds slice is ever formed.
            let idx = cursor.idx;
            cursor.idx = npix;
            log::warn!("stream cursor overran: idx={} npix={}", idx, npix);
            return Err(Error::CursorDesync { idx, npix });
        }
        if cursor.idx == npix {
            return Ok(());
        }
        let k = PIXELS_PER_REPORT.min(npix - cursor.idx);
        let report = encode_exposure(cursor.idx as u16, &cursor.pix[cursor.idx..cursor.idx + k]);
        self.tx.send(&report)?;
        cursor.idx += k;
        log::trace!("sent chunk, cursor now {}/{}", cursor.idx, npix);
        Ok(())
    }
}
