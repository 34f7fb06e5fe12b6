use sigcalc::{combine, impulse, unit_step, DiscreteSignal, IndexRange, SignalShape};

#[test]
fn impulse_inside_and_outside_range() {
    let range = IndexRange::new(-2, 2);
    let inside = impulse::<f64>(4.0, -1, range);
    assert_eq!(inside.values, vec![0.0, 4.0, 0.0, 0.0, 0.0]);
    let outside = impulse::<f64>(4.0, 9, range);
    assert_eq!(outside.values, vec![0.0; 5]);
    assert_eq!(outside.shape(), SignalShape::AllZero);
}

#[test]
fn unit_step_respects_delay_sign() {
    let range = IndexRange::new(-2, 2);
    let ahead = unit_step::<f64>(1.0, -1, range);
    assert_eq!(ahead.values, vec![0.0, 1.0, 1.0, 1.0, 1.0]);
    let behind = unit_step::<f64>(1.0, 3, range);
    assert_eq!(behind.values, vec![0.0; 5]);
}

#[test]
fn combine_spans_union_of_domains() {
    let a = DiscreteSignal::new(vec![1.0, 1.0], -4);
    let b = DiscreteSignal::new(vec![2.0], 3);
    let c = combine(&[a, b]);
    assert_eq!(c.start_index, -4);
    assert_eq!(c.len(), 8);
    assert_eq!(c.values[0], 1.0);
    assert_eq!(c.values[7], 2.0);
}

#[test]
fn combine_overlapping_signals_sums() {
    let range = IndexRange::new(0, 4);
    let a = unit_step::<f64>(1.0, 1, range);
    let b = impulse::<f64>(-1.0, 2, range);
    let c = combine(&[a, b]);
    assert_eq!(c.values, vec![0.0, 1.0, 0.0, 1.0, 1.0]);
}

#[test]
fn combine_distinguishes_empty_from_zero() {
    assert_eq!(combine::<f64>(&[]), DiscreteSignal::empty());
    assert_ne!(DiscreteSignal::<f64>::empty(), DiscreteSignal::zero());
    assert_eq!(DiscreteSignal::<f64>::empty().shape(), SignalShape::Empty);
    assert_eq!(DiscreteSignal::<f64>::zero().shape(), SignalShape::AllZero);
}

#[test]
fn combine_skips_empty_members() {
    let a = DiscreteSignal::new(vec![1.0], 0);
    let c = combine(&[DiscreteSignal::empty(), a.clone()]);
    assert_eq!(c, a);
}

#[test]
fn trim_all_zero_signal_returns_zero_sentinel() {
    let s = DiscreteSignal::new(vec![0.0; 10], -5);
    assert_eq!(s.trim_to_relevant_range(2), DiscreteSignal::zero());
}

#[test]
fn trim_clamps_padding_at_domain_edges() {
    let s = DiscreteSignal::new(vec![7.0, 0.0, 0.0, 0.0, 0.0], 0);
    let t = s.trim_to_relevant_range(2);
    // Padding cannot extend left of the first sample.
    assert_eq!(t.start_index, 0);
    assert_eq!(t.values, vec![7.0, 0.0, 0.0]);
}

#[test]
fn trim_ignores_subthreshold_noise() {
    let s = DiscreteSignal::new(vec![1e-12, 0.0, 1.0, 1e-11], 0);
    let t = s.trim_to_relevant_range(0);
    assert_eq!(t.values, vec![1.0]);
    assert_eq!(t.start_index, 2);
}

#[test]
fn signals_are_never_mutated_by_operations() {
    let a = DiscreteSignal::new(vec![1.0, 2.0], 0);
    let b = DiscreteSignal::new(vec![3.0], 1);
    let before = (a.clone(), b.clone());
    let _ = combine(&[a.clone(), b.clone()]);
    let _ = a.trim_to_relevant_range(1);
    assert_eq!((a, b), before);
}

#[test]
fn index_range_validity() {
    assert!(IndexRange::new(2, 1).is_empty());
    assert!(!IndexRange::new(2, 2).is_empty());
    assert_eq!(IndexRange::new(-3, 3).len(), 7);
    assert!(IndexRange::new(-3, 3).contains(0));
    assert!(!IndexRange::new(-3, 3).contains(4));
}
