//! Interactive two-signal operation explorer.
//!
//! Holds two signals in state, applies the chosen operation, and
//! prints the result as an index/value table.
//!
//! Controls:
//! - 1: sum
//! - 2: difference (S1 - S2)
//! - 3: scale S1 by 2
//! - 4: reflect S1
//! - 5: shift S1 by 2
//! - 6: interpolate S1 by 2
//! - 7: convolve
//! - 8: decimate S1 by 2
//! - a: append a random sample to S1
//! - x: drop the last sample of S1
//! - Q or ESC: quit

mod common;

use anyhow::Result;
use common::print_signal_table;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rand::Rng;
use rand::rngs::ThreadRng;
use siglab::{Operation, Signal, generate};
use std::time::Duration;

fn main() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut signal1 = generate::ramp(-10, 2).rezeroed(1);
    let mut signal2 = generate::random(3, &mut rng).rezeroed(1);

    print_signal_table("Signal 1", &signal1);
    print_signal_table("Signal 2", &signal2);
    print_menu();

    enable_raw_mode()?;
    let outcome = run(&mut signal1, &mut signal2, &mut rng);
    disable_raw_mode()?;
    outcome
}

fn print_menu() {
    print!("Operations:\r\n");
    print!("  1 sum        2 difference   3 scale x2      4 reflect\r\n");
    print!("  5 shift by 2 6 interpolate  7 convolve      8 decimate\r\n");
    print!("  a append random sample to S1   x drop last sample of S1\r\n");
    print!("  q quit\r\n\r\n");
}

fn run(signal1: &mut Signal, signal2: &mut Signal, rng: &mut ThreadRng) -> Result<()> {
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        let operation = match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('1') => Some(Operation::Sum),
            KeyCode::Char('2') => Some(Operation::Subtract),
            KeyCode::Char('3') => Some(Operation::Scale(2.0)),
            KeyCode::Char('4') => Some(Operation::Reflect),
            KeyCode::Char('5') => Some(Operation::Shift(2)),
            KeyCode::Char('6') => Some(Operation::Resample(2.0)),
            KeyCode::Char('7') => Some(Operation::Convolve),
            KeyCode::Char('8') => Some(Operation::Resample(0.5)),
            KeyCode::Char('a') => {
                // Edits construct new values; the state here is the
                // only thing that changes
                *signal1 = signal1.with_appended(rng.gen_range(-1.0..=1.0))?;
                print_signal_table("Signal 1", signal1);
                None
            }
            KeyCode::Char('x') => {
                if !signal1.is_empty() {
                    *signal1 = signal1.without_sample(signal1.len() - 1);
                }
                print_signal_table("Signal 1", signal1);
                None
            }
            _ => None,
        };

        if let Some(op) = operation {
            let result = op.apply(signal1, signal2);
            print_signal_table(&op.label(), &result);
        }
    }
}
