//! Forward and inverse transforms driven from free text, the way the
//! presentation layer calls the core.

use sigcalc::{fft, ifft, parse_complex_list};

fn main() {
    let input = "1, 0, 2+i, 1, 0.5i";
    let samples = parse_complex_list::<f64>(input).expect("valid sample list");
    println!("input   ({} samples): {}", samples.len(), input);

    // Length 5 pads up to 8; the three trailing bins belong to the padding.
    let spectrum = fft(&samples).expect("non-empty input");
    println!("spectrum ({} bins):", spectrum.len());
    for (k, bin) in spectrum.iter().enumerate() {
        println!("  X[{k}] = {:.6} {:+.6}i", bin.re, bin.im);
    }

    let recovered = ifft(&spectrum).expect("non-empty input");
    println!("inverse:");
    for (n, sample) in recovered.iter().enumerate() {
        println!("  x[{n}] = {:.6} {:+.6}i", sample.re, sample.im);
    }
}
