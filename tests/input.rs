use sigcalc::{fft, parse_complex_list, Complex64, ParseComplexError};

#[test]
fn accepted_token_forms() {
    let values = parse_complex_list::<f64>("2, 3i, 1+2i, 1-2i, i, -i, +i, 0.5").unwrap();
    let expected = [
        Complex64::new(2.0, 0.0),
        Complex64::new(0.0, 3.0),
        Complex64::new(1.0, 2.0),
        Complex64::new(1.0, -2.0),
        Complex64::new(0.0, 1.0),
        Complex64::new(0.0, -1.0),
        Complex64::new(0.0, 1.0),
        Complex64::new(0.5, 0.0),
    ];
    assert_eq!(values, expected);
}

#[test]
fn whitespace_inside_tokens_is_ignored() {
    let values = parse_complex_list::<f64>(" 1 + 2i , 3 ").unwrap();
    assert_eq!(values[0], Complex64::new(1.0, 2.0));
    assert_eq!(values[1], Complex64::new(3.0, 0.0));
}

#[test]
fn malformed_tokens_are_reported_not_dropped() {
    assert_eq!(
        parse_complex_list::<f64>("1, oops, 3").unwrap_err(),
        ParseComplexError::MalformedToken
    );
    assert_eq!(
        parse_complex_list::<f64>("").unwrap_err(),
        ParseComplexError::Empty
    );
}

#[test]
fn parsed_list_feeds_the_transform() {
    let samples = parse_complex_list::<f64>("1, 0, 0, 0").unwrap();
    let spectrum = fft(&samples).unwrap();
    for bin in &spectrum {
        assert!((bin.re - 1.0).abs() < 1e-10);
        assert_eq!(bin.im, 0.0);
    }
}
