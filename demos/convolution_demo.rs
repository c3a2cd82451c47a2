//! Worked convolution example.
//!
//! Builds two small signals with the `signal!` literal, convolves
//! them, and shows the unit-impulse identity.

mod common;

use common::print_signal_table;
use siglab::{convolve, generate, signal};

fn main() {
    let s1 = signal!("3 [-1] 2 5");
    let s2 = signal!("-2 4 [0.5]");

    print_signal_table("Signal 1", &s1);
    print_signal_table("Signal 2", &s2);

    let result = convolve(&s1, &s2);
    print_signal_table("Convolution (S1, S2)", &result);

    let identity = convolve(&s1, &generate::impulse());
    print_signal_table("Convolution with the unit impulse", &identity);
    assert_eq!(identity, s1);
    println!("Convolving with the unit impulse returned Signal 1 unchanged.");
}
