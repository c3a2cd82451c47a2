//! Records a short capture from the default input device and turns it
//! into a signal.
//!
//! The capture collaborator contract is deliberately simple: once the
//! recording finishes, a finite buffer of samples arrives with a zero
//! index of 0, and from there it is a signal like any other. The raw
//! capture is decimated by 10 on ingestion so the result stays small
//! enough to inspect sample by sample.
//!
//! With the `wav` feature enabled the capture is also written to
//! `capture.wav`.

mod common;

use anyhow::{Context, Result, bail};
use common::print_signal_table;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use siglab::Signal;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const CAPTURE_SECONDS: u64 = 2;
const DECIMATION: usize = 10;

fn main() -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .context("no input device available")?;
    let config = device
        .default_input_config()
        .context("no default input config")?;

    let channels = config.channels() as usize;
    let sample_rate = config.sample_rate().0;

    let buffer = Arc::new(Mutex::new(Vec::<f64>::new()));
    let sink = Arc::clone(&buffer);

    let err_fn = |err| eprintln!("capture error: {}", err);
    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => device.build_input_stream(
            &config.into(),
            move |data: &[f32], _: &_| {
                let mut sink = sink.lock().unwrap();
                // First channel only
                sink.extend(data.iter().step_by(channels).map(|&v| v as f64));
            },
            err_fn,
            None,
        )?,
        cpal::SampleFormat::I16 => device.build_input_stream(
            &config.into(),
            move |data: &[i16], _: &_| {
                let mut sink = sink.lock().unwrap();
                sink.extend(
                    data.iter()
                        .step_by(channels)
                        .map(|&v| v as f64 / i16::MAX as f64),
                );
            },
            err_fn,
            None,
        )?,
        format => bail!("unsupported input sample format {:?}", format),
    };

    println!(
        "Recording {}s from the default input device ({} Hz)...",
        CAPTURE_SECONDS, sample_rate
    );
    stream.play()?;
    std::thread::sleep(Duration::from_secs(CAPTURE_SECONDS));
    drop(stream);

    let raw = buffer.lock().unwrap().clone();
    let decimated: Vec<f64> = raw.into_iter().step_by(DECIMATION).collect();

    // Validation at the boundary: a NaN from a broken capture is
    // rejected here instead of flowing into every later result
    let signal = Signal::new(decimated, 0)?;

    println!("Captured {} samples after x{} decimation", signal.len(), DECIMATION);
    print_signal_table("Capture", &signal);

    #[cfg(feature = "wav")]
    {
        siglab::write_wav(&signal, "capture.wav", sample_rate / DECIMATION as u32)?;
        println!("Wrote capture.wav");
    }

    Ok(())
}
