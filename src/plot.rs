//! Stem-plot rendering of signals to PNG files.

use crate::Signal;
use plotters::prelude::*;
use std::error::Error;

/// Draws a signal as a stem plot and writes it to `path` as a
/// 640x480 PNG.
///
/// The x axis carries logical indices, the y axis sample values; each
/// sample gets a vertical stem from zero plus a marker, the usual way
/// a discrete-time sequence is drawn. Axis ranges are padded so that
/// flat and empty signals still render.
pub fn plot_signal(signal: &Signal, title: &str, path: &str) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let domain = signal.domain();
    let x_min = domain.start as f64 - 1.0;
    let x_max = domain.end as f64 + 1.0;

    let y_lo = signal.samples().iter().cloned().fold(0.0, f64::min);
    let y_hi = signal.samples().iter().cloned().fold(0.0, f64::max);
    let y_pad = ((y_hi - y_lo) * 0.1).max(0.5);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, (y_lo - y_pad)..(y_hi + y_pad))?;

    chart.configure_mesh().draw()?;

    chart.draw_series(signal.iter().map(|(n, v)| {
        PathElement::new(vec![(n as f64, 0.0), (n as f64, v)], BLUE.stroke_width(2))
    }))?;
    chart.draw_series(
        signal
            .iter()
            .map(|(n, v)| Circle::new((n as f64, v), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
