pub mod parser;

use num_derive::{FromPrimitive, ToPrimitive};

/// Fixed size of every packet on the transport
pub const REPORT_BYTES: usize = 11;
/// Exposure report header: kind tag plus 16 bit starting pixel index
const EXPOSURE_HEADER_BYTES: usize = 3;
/// Amount of pixel values an exposure report carries
pub const PIXELS_PER_REPORT: usize = (REPORT_BYTES - EXPOSURE_HEADER_BYTES) / 2;

/// One encoded report, ready for a transport send
pub type ReportBytes = [u8; REPORT_BYTES];

pub enum Endianness {
    LittleEndian,
    BigEndian,
}
const ENDIANNESS: Endianness = Endianness::LittleEndian;
pub const U16_FROM_BYTES: fn([u8; 2]) -> u16 = match ENDIANNESS {
    Endianness::LittleEndian => u16::from_le_bytes,
    Endianness::BigEndian => u16::from_be_bytes,
};
pub const U16_TO_BYTES: fn(u16) -> [u8; 2] = match ENDIANNESS {
    Endianness::LittleEndian => u16::to_le_bytes,
    Endianness::BigEndian => u16::to_be_bytes,
};

/// Leading kind tag shared by every report on the transport
#[derive(ToPrimitive, FromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReportKind {
    State = 0x01,
    Exposure = 0x02,
}

/// Ordinary low-latency device state report
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct StateReport {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub buttons: u16,
    pub status: u16,
}

impl StateReport {
    pub fn encode(&self) -> ReportBytes {
        let mut out = [0u8; REPORT_BYTES];
        out[0] = ReportKind::State as u8;
        out[1..3].copy_from_slice(&U16_TO_BYTES(self.x as u16));
        out[3..5].copy_from_slice(&U16_TO_BYTES(self.y as u16));
        out[5..7].copy_from_slice(&U16_TO_BYTES(self.z as u16));
        out[7..9].copy_from_slice(&U16_TO_BYTES(self.buttons));
        out[9..11].copy_from_slice(&U16_TO_BYTES(self.status));
        out
    }
}

/// One exposure report worth of frame pixels.
///
/// The trailing slots of a frame's final chunk are zero padding; the receiver
/// knows the frame's pixel count and takes the valid prefix.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ExposureChunk {
    /// Index of `pix[0]` within the frame
    pub start: u16,
    pub pix: [u16; PIXELS_PER_REPORT],
}

/// Decoded form of any report on the transport
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Report {
    State(StateReport),
    Exposure(ExposureChunk),
}

/// Encode one exposure chunk, `pix.len() <= PIXELS_PER_REPORT`, zero padded
pub(crate) fn encode_exposure(start: u16, pix: &[u16]) -> ReportBytes {
    debug_assert!(pix.len() <= PIXELS_PER_REPORT);
    let mut out = [0u8; REPORT_BYTES];
    out[0] = ReportKind::Exposure as u8;
    out[1..3].copy_from_slice(&U16_TO_BYTES(start));
    for (i, px) in pix.iter().enumerate() {
        let at = EXPOSURE_HEADER_BYTES + i * 2;
        out[at..at + 2].copy_from_slice(&U16_TO_BYTES(*px));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expected_state_encoding() {
        let report = StateReport {
            x: 100,
            y: -5,
            z: 1000,
            buttons: 0x0003,
            status: 0x0001,
        };
        assert_eq!(
            report.encode(),
            [0x01, 0x64, 0x00, 0xFB, 0xFF, 0xE8, 0x03, 0x03, 0x00, 0x01, 0x00]
        );
    }

    #[test]
    fn expected_exposure_encoding() {
        let bytes = encode_exposure(0x0104, &[0x1122, 0x3344, 0x5566, 0x7788]);
        assert_eq!(
            bytes,
            [0x02, 0x04, 0x01, 0x22, 0x11, 0x44, 0x33, 0x66, 0x55, 0x88, 0x77]
        );
    }

    #[test]
    fn short_exposure_chunks_are_zero_padded() {
        let bytes = encode_exposure(8, &[0xABCD]);
        assert_eq!(
            bytes,
            [0x02, 0x08, 0x00, 0xCD, 0xAB, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }
}
