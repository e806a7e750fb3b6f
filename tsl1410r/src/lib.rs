//! Acquisition and report streaming core for a TSL1410R-class linear
//! photodiode array used as a plunger position sensor.
//!
//! The driver bit-bangs the sensor's SI/CLK shift register protocol through
//! the [`SensorIo`] seam, captures decimated 16 bit intensity profiles into a
//! [`FrameBuffer`], and [`FrameStreamer`] pushes a captured frame across a
//! fixed-size packet transport one chunk per call, interleaved with the
//! device's ordinary state reports. The receiving side decodes reports with
//! [`report::parser`] and rebuilds frames with [`FrameAssembler`].
#![cfg_attr(not(feature = "std"), no_std)]

pub mod assemble;
pub mod error;
pub mod frame;
pub mod hal;
#[cfg(feature = "std")]
pub mod hex_parser;
pub mod reg;
pub mod report;
pub mod sensor;
pub mod stream;

pub use assemble::FrameAssembler;
pub use error::{Error, Result};
pub use frame::{Acquisition, FrameBuffer, SENSOR_PIXEL_COUNT};
#[cfg(feature = "embedded-hal")]
pub use hal::embedded_hal::EmbeddedHalIo;
pub use hal::{AnalogSource, SensorIo};
pub use report::{
    ExposureChunk, Report, ReportBytes, ReportKind, StateReport, PIXELS_PER_REPORT, REPORT_BYTES,
};
pub use sensor::Tsl1410r;
pub use stream::{FrameStreamer, ReportSink, StreamCursor};
