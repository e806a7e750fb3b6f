mod cli;
mod output;
mod sim;

use clap::{Parser, ValueEnum};
use simple_eyre::{eyre::eyre, Result};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tsl1410r::report::parser::parse_report;
use tsl1410r::{FrameAssembler, FrameBuffer, FrameStreamer, Report, StateReport};
use utilities::RecordingSink;

use cli::*;
use sim::{ProfileKind, SimConf};

fn main() -> Result<()> {
    simple_eyre::install()?;
    let cli = Cli::parse();
    env_logger::init();

    match &cli.command {
        Commands::Profiles => list_profiles(),
        Commands::Capture(conf) => capture(conf),
        Commands::Stream(conf) => stream(conf),
    }
}

/// Returns std::io::Write stream with coloring enabled if program is run interactively
fn get_stdout() -> StandardStream {
    StandardStream::stdout(if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

fn list_profiles() -> Result<()> {
    let mut stdout = get_stdout();
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(&mut stdout, "Built-in sensor profiles:")?;
    stdout.reset()?;
    for kind in ProfileKind::value_variants() {
        if let Some(value) = kind.to_possible_value() {
            println!("{:10} {}", value.get_name(), kind.describe());
        }
    }
    Ok(())
}

fn acquire(acq: &AcquisitionConf, sim: &SimConf) -> Result<FrameBuffer> {
    let mut sensor = sim.open_sensor();
    let mut frame = FrameBuffer::new();
    // Flush residual charge so the exposure window starts here
    sensor.clear()?;
    frame.capture(&mut sensor, &acq.to_acquisition())?;
    Ok(frame)
}

fn capture(conf: &CaptureConf) -> Result<()> {
    let frame = acquire(&conf.acq, &conf.sim)?;
    conf.output.write_frame(frame.pixels())
}

fn stream(conf: &StreamConf) -> Result<()> {
    let frame = acquire(&conf.acq, &conf.sim)?;
    let state = StateReport {
        z: conf.sim.plunger_z(),
        status: 0x0001,
        ..Default::default()
    };

    let mut streamer = FrameStreamer::new(RecordingSink::default());
    let mut cursor = frame.begin_stream();
    // One chunk and one state report per loop turn, the way the device's
    // polling loop keeps state latency bounded while a frame drains
    while !cursor.is_done() {
        streamer.send_next_chunk(&mut cursor)?;
        streamer.send_state(&state)?;
    }
    let sink = streamer.into_inner();

    let mut asm = FrameAssembler::new(frame.len())?;
    let mut states = 0usize;
    for bytes in &sink.reports {
        let (_, report) = parse_report(bytes).map_err(|_| eyre!("Could not decode report"))?;
        if let Report::State(_) = report {
            states += 1;
        }
        asm.accept(&report)?;
    }
    if !asm.is_complete() || asm.pixels() != frame.pixels() {
        return Err(eyre!("Reassembled frame does not match the capture"));
    }

    let mut stdout = get_stdout();
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(
        &mut stdout,
        "Frame of {} pixels reconstructed exactly.",
        frame.len()
    )?;
    stdout.reset()?;
    println!(
        "{} exposure chunks interleaved with {} state reports.",
        sink.reports.len() - states,
        states
    );

    conf.output.write_frame(frame.pixels())
}
