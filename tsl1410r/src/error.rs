use crate::frame::SENSOR_PIXEL_COUNT;
use core::result::Result as CoreResult;
use thiserror::Error;

pub type Result<T> = CoreResult<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sample count {0} is outside of 1..={max}", max = SENSOR_PIXEL_COUNT)]
    InvalidSampleCount(usize),
    #[error("pixel buffer holds {got} entries, acquisition needs {need}")]
    PixelBufferTooSmall { need: usize, got: usize },
    #[error("sensor line could not be driven")]
    Pin,
    #[error("report was rejected by the transport")]
    Transport,
    #[error("stream cursor at {idx} is past the end of a {npix} pixel frame")]
    CursorDesync { idx: usize, npix: usize },
    #[error("chunk starting at {got} arrived out of order, expected {expected}")]
    OutOfOrderChunk { expected: usize, got: usize },
    #[error("chunk at {start} does not fit a {npix} pixel frame")]
    ChunkOutOfBounds { start: usize, npix: usize },
    #[error("could not parse recieved data correctly: {0}")]
    InvalidData(&'static str),
    #[error("unexpected end of report stream")]
    UnexpectedEop,

    #[cfg(feature = "std")]
    #[error("{0}")]
    IOError(#[from] std::io::Error),
}
