//! Shared helpers for the demo programs.

use siglab::Signal;

/// Prints a signal as a two-row index/value table. Signals of 100
/// samples or more get a summary line instead of a table.
///
/// Lines end in `\r\n` so output stays aligned under raw terminal
/// mode.
pub fn print_signal_table(title: &str, signal: &Signal) {
    print!(
        "{} ({} samples, offset {})\r\n",
        title,
        signal.len(),
        signal.offset()
    );

    if signal.is_empty() {
        print!("  (empty)\r\n\r\n");
        return;
    }

    if signal.len() >= 100 {
        let lo = signal.samples().iter().cloned().fold(f64::MAX, f64::min);
        let hi = signal.samples().iter().cloned().fold(f64::MIN, f64::max);
        print!(
            "  domain {:?}, values in [{:.3}, {:.3}]\r\n\r\n",
            signal.domain(),
            lo,
            hi
        );
        return;
    }

    let mut indices = String::from("  index |");
    let mut values = String::from("  value |");
    for (n, v) in signal.iter() {
        indices.push_str(&format!("{:>8}", n));
        values.push_str(&format!("{:>8.2}", v));
    }
    print!("{}\r\n{}\r\n\r\n", indices, values);
}
