use crate::*;

#[test]
fn test_mean() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Some(3.0));
}

#[test]
fn test_median_odd_and_even() {
    assert_eq!(median(&mut [5.0, 1.0, 3.0]), Some(3.0));
    assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    assert_eq!(median(&mut []), None);
}

#[test]
fn test_median_orders_nan_last() {
    assert_eq!(median(&mut [f64::NAN, 1.0, 2.0]), Some(2.0));
}

#[test]
fn test_vector_mean() {
    let vectors = [Vector::new(0.0, 1.0, 2.0), Vector::new(2.0, 3.0, 4.0)];
    let m = Vector::mean_of(&vectors).unwrap();
    assert!(m.approx_eq(&Vector::new(1.0, 2.0, 3.0), 1e-12));
    assert!(Vector::mean_of(&[]).is_none());
}

#[test]
fn test_median_per_axis_keeps_input_order() {
    let vectors = [
        Vector::new(3.0, -1.0, 10.0),
        Vector::new(1.0, -3.0, 30.0),
        Vector::new(2.0, -2.0, 20.0),
    ];
    let mut scratch = [0.0; 3];
    let m = median_per_axis(&vectors, &mut scratch).unwrap();
    assert!(m.approx_eq(&Vector::new(2.0, -2.0, 20.0), 1e-12));
    assert_eq!(vectors[0], Vector::new(3.0, -1.0, 10.0));

    let mut too_small = [0.0; 2];
    assert!(median_per_axis(&vectors, &mut too_small).is_none());
}
