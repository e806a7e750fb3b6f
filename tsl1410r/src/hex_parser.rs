use crate::{error::Error, report::parser::parse_report, report::Report};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::multispace0,
    combinator::{all_consuming, map_res},
    multi::many1,
    sequence::delimited,
    IResult,
};

/// Decodes a pair of chars formatted as hex into a byte. For example "FF" -> 255
fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex| u8::from_str_radix(hex, 16),
    )(input)
}

pub fn parse_hex_str(input: &str) -> IResult<&str, Vec<u8>> {
    all_consuming(many1(delimited(multispace0, hex_byte, multispace0)))(input)
}

/// Decode a hex dump of a report stream, as stored under `resources/test`
pub fn decode_from_string(input: &str) -> Result<Vec<Report>, Error> {
    let (_, data) =
        parse_hex_str(input).map_err(|_| Error::InvalidData("could not parse hex file"))?;
    let mut data = &data[..];
    let mut reports = Vec::new();
    loop {
        if data.is_empty() {
            break;
        }
        match parse_report(data) {
            Ok((rest, report)) => {
                data = rest;
                reports.push(report);
            }
            // Reports are fixed size packets, a truncated tail is corruption
            Err(nom::Err::Incomplete(_)) => return Err(Error::UnexpectedEop),
            Err(_) => return Err(Error::InvalidData("could not parse report correctly")),
        }
    }
    Ok(reports)
}
