use nom::{
    multi::fill,
    number::streaming::{be_u8, le_i16, le_u16},
    IResult,
};
use num_traits::FromPrimitive;

use super::{ExposureChunk, Report, ReportKind, StateReport, PIXELS_PER_REPORT};

/// Parse one report off the front of a byte stream.
///
/// Streaming: returns `Incomplete` while less than a whole report arrived.
/// An unrecognized kind tag is an error, not a skippable byte, because the
/// transport delivers whole packets and cannot lose alignment.
pub fn parse_report(input: &[u8]) -> IResult<&[u8], Report> {
    let (input, code) = be_u8(input)?;
    match ReportKind::from_u8(code) {
        Some(ReportKind::State) => state_report_parser(input),
        Some(ReportKind::Exposure) => exposure_report_parser(input),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        ))),
    }
}

fn state_report_parser(input: &[u8]) -> IResult<&[u8], Report> {
    let (input, x) = le_i16(input)?;
    let (input, y) = le_i16(input)?;
    let (input, z) = le_i16(input)?;
    let (input, buttons) = le_u16(input)?;
    let (input, status) = le_u16(input)?;
    Ok((
        input,
        Report::State(StateReport {
            x,
            y,
            z,
            buttons,
            status,
        }),
    ))
}

fn exposure_report_parser(input: &[u8]) -> IResult<&[u8], Report> {
    let (input, start) = le_u16(input)?;
    let mut pix = [0u16; PIXELS_PER_REPORT];
    let (input, ()) = fill(le_u16, &mut pix)(input)?;
    Ok((input, Report::Exposure(ExposureChunk { start, pix })))
}
