use crate::{output::Output, sim::SimConf};
use clap::{Args, Parser, Subcommand};
use tsl1410r::{Acquisition, SENSOR_PIXEL_COUNT};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lists built-in simulated sensor profiles
    Profiles,
    /// Capture a single frame from the simulated sensor
    Capture(CaptureConf),
    /// Capture a frame, stream it chunk by chunk and reassemble it
    Stream(StreamConf),
}

#[derive(Args)]
pub struct AcquisitionConf {
    /// Amount of pixels sampled out of the 1280 pixel array
    #[clap(short = 'n', long = "samples", value_parser, default_value_t = SENSOR_PIXEL_COUNT)]
    pub samples: usize,

    /// Extra light integration time in microseconds
    #[clap(long, value_parser, default_value_t = 0)]
    pub integrate_us: u32,
}

impl AcquisitionConf {
    pub fn to_acquisition(&self) -> Acquisition {
        Acquisition {
            n: self.samples,
            integrate_us: self.integrate_us,
        }
    }
}

#[derive(Args)]
pub struct CaptureConf {
    #[clap(flatten)]
    pub acq: AcquisitionConf,

    #[clap(flatten)]
    pub sim: SimConf,

    #[clap(flatten)]
    pub output: Output,
}

#[derive(Args)]
pub struct StreamConf {
    #[clap(flatten)]
    pub acq: AcquisitionConf,

    #[clap(flatten)]
    pub sim: SimConf,

    #[clap(flatten)]
    pub output: Output,
}
