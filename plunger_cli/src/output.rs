use clap::{Args, ValueEnum};
use plotters::prelude::*;
use simple_eyre::{eyre::eyre, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Args)]
pub struct Output {
    /// Path to a file where the captured profile should be stored
    #[clap(short, long, value_parser = unique_path_parser, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// File format for the captured profile
    #[clap(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

fn unique_path_parser(p: &str) -> Result<PathBuf> {
    let p = Path::new(p);
    if p.try_exists()? {
        Err(eyre!("Path {p:?} already exists"))
    } else {
        Ok(p.to_path_buf())
    }
}

#[derive(ValueEnum, Clone, Default)]
pub enum OutputFormat {
    #[default]
    Chart,
    Csv,
    Hex,
}

fn frame_to_csv(pix: &[u16]) -> String {
    log::trace!("Formatting frame as CSV");
    pix.iter()
        .map(|pixel| pixel.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn frame_to_hex(pix: &[u16]) -> String {
    log::trace!("Formatting frame as hex");
    pix
        // Split frame into 4 word lines
        .chunks(4)
        .map(|chunk| {
            chunk
                .iter()
                .map(|pixel| {
                    // Format each pixel as 4 letter hex word
                    let [b1, b2] = u16::to_be_bytes(*pixel);
                    format!("{:02X}{:02X}", b1, b2)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    pix: &[u16],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    log::trace!("Drawing chart axes");
    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Plunger profile, {} samples", pix.len()),
            ("sans-serif", (5).percent()),
        )
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (5).percent())
        .build_cartesian_2d(0..pix.len(), 0u32..65536u32)?;

    chart
        .configure_mesh()
        .x_desc("Pixel #")
        .y_desc("Intensity")
        .draw()?;

    log::trace!("Drawing frame as a line chart");
    chart.draw_series(LineSeries::new(
        pix.iter().enumerate().map(|(x, y)| (x, *y as u32)),
        BLACK,
    ))?;

    root.present()?;

    Ok(())
}

impl Output {
    pub fn write_frame(&self, pix: &[u16]) -> Result<()> {
        log::debug!("Saving frame to {:?}", self.output);
        match self.format {
            OutputFormat::Chart => {
                let root =
                    BitMapBackend::new(self.output.as_path(), (1280, 720)).into_drawing_area();
                draw_frame(&root, pix)?;
            }
            OutputFormat::Csv => {
                let mut out = File::create(self.output.as_path())?;
                out.write_all(frame_to_csv(pix).as_bytes())?;
            }
            OutputFormat::Hex => {
                let mut out = File::create(self.output.as_path())?;
                out.write_all(frame_to_hex(pix).as_bytes())?;
            }
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_frame_to_csv() {
        let pix = [1000u16; 16];
        let csv = frame_to_csv(&pix);
        let csv_fields: Vec<_> = csv.split(",").collect();
        assert_eq!(csv_fields.len(), 16);
        assert_eq!(csv_fields[0], "1000");
    }

    #[test]
    fn convert_frame_to_hex() {
        let pix = [u16::from_be_bytes([0xA1, 0xB2]); 8];
        let hex = frame_to_hex(&pix);
        let hex_lines: Vec<_> = hex.split("\n").collect();
        assert_eq!(hex_lines.len(), 2);
        assert_eq!(hex_lines[0], "A1B2 A1B2 A1B2 A1B2");
    }
}
