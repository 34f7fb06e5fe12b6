//! Parse two signal expressions and convolve them over a display range.

use sigcalc::{convolve_to_range, parse_signal_expression, IndexRange};

fn main() {
    let f_text = "δ[n] + 0.5*δ[n-1]";
    let g_text = "u[n] - u[n-4]";
    let range = IndexRange::new(-2, 8);

    let f = parse_signal_expression::<f64>(f_text, Some(range));
    let g = parse_signal_expression::<f64>(g_text, Some(range));
    println!("f = {f_text}  over {:?}", f.indices());
    println!("g = {g_text}");

    let (result, indices) = convolve_to_range(&f, &g, IndexRange::new(-2, 10));
    println!("(f * g)[n]:");
    for (n, y) in indices.iter().zip(result.values.iter()) {
        println!("  y[{n:>3}] = {y:.3}");
    }
}
