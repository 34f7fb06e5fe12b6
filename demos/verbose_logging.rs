//! Demonstrates enabling verbose logging for sigcalc.
use sigcalc::{fft, Complex64};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![
        Complex64::new(1.0, 0.0),
        Complex64::new(2.0, 0.0),
        Complex64::new(3.0, 0.0),
        Complex64::new(4.0, 0.0),
    ];
    let spectrum = fft(&signal).unwrap();
    println!("bins: {}", spectrum.len());
}
