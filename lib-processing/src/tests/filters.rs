use core::f64::consts::PI;

use crate::*;

#[test]
fn test_gaussian_kernel_shape() {
    let kernel = gaussian_kernel(2.0);
    assert_eq!(kernel.len(), 2 * 8 + 1);
    assert!((kernel.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    for i in 0..kernel.len() / 2 {
        assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-15);
        assert!(kernel[i] < kernel[i + 1]);
    }
}

#[test]
fn test_gaussian_zero_sigma_is_identity() {
    let data = [3.0, -1.0, 4.0, 1.0, -5.0];
    assert_eq!(gaussian_filter1d(&data, 0.0).unwrap(), data.to_vec());
}

#[test]
fn test_gaussian_keeps_constant_signal() {
    // Kernel much wider than the signal, every index gets mirrored several times.
    for len in [1, 3, 50] {
        let data = vec![7.5; len];
        let smoothed = gaussian_filter1d(&data, 5.0).unwrap();
        assert_eq!(smoothed.len(), len);
        assert!(smoothed.iter().all(|v| (v - 7.5).abs() < 1e-12), "{:?}", smoothed);
    }
}

#[test]
fn test_gaussian_spreads_impulse_symmetrically() {
    let mut data = vec![0.0; 101];
    data[50] = 1.0;
    let smoothed = gaussian_filter1d(&data, 3.0).unwrap();
    let kernel = gaussian_kernel(3.0);
    assert!((smoothed[50] - kernel[kernel.len() / 2]).abs() < 1e-15);
    for offset in 1..20 {
        assert!((smoothed[50 - offset] - smoothed[50 + offset]).abs() < 1e-15);
    }
    assert!((smoothed.iter().sum::<f64>() - 1.0).abs() < 1e-12);
}

#[test]
fn test_gaussian_rejects_negative_sigma() {
    assert!(matches!(
        gaussian_filter1d(&[1.0], -1.0),
        Err(ProcessingError::InvalidParameter { name: "sigma", .. })
    ));
}

#[test]
fn test_butter_sections_have_unit_dc_gain() {
    for order in 1..7 {
        let sections = butter_lowpass(10.0, 300.0, order).unwrap();
        assert_eq!(sections.len(), (order + 1) / 2);
        let gain: f64 = sections.iter().map(Biquad::dc_gain).product();
        assert!((gain - 1.0).abs() < 1e-12, "order {}: {}", order, gain);
    }
}

#[test]
fn test_butter_rejects_invalid_design() {
    assert!(butter_lowpass(150.0, 300.0, 2).is_err());
    assert!(butter_lowpass(0.0, 300.0, 2).is_err());
    assert!(butter_lowpass(10.0, 0.0, 2).is_err());
    assert!(butter_lowpass(10.0, 300.0, 0).is_err());
}

#[test]
fn test_butter_filter_keeps_constant_signal() {
    let data = vec![-2.0; 200];
    let filtered = butter_lowpass_filter(&data, 5.0, 100.0, 5).unwrap();
    assert!(filtered.iter().all(|v| (v + 2.0).abs() < 1e-9));
}

#[test]
fn test_butter_filter_removes_nyquist_oscillation() {
    let data: Vec<f64> = (0..500).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let filtered = butter_lowpass_filter(&data, 5.0, 100.0, 2).unwrap();
    for v in &filtered[100..400] {
        assert!(v.abs() < 1e-3, "{}", v);
    }
}

#[test]
fn test_butter_filter_has_no_phase_shift() {
    let fs = 100.0;
    let data: Vec<f64> = (0..1000).map(|i| libm::sin(2.0 * PI * 0.5 * i as f64 / fs)).collect();
    let filtered = butter_lowpass_filter(&data, 10.0, fs, 4).unwrap();
    for i in 200..800 {
        assert!((filtered[i] - data[i]).abs() < 1e-3, "{} != {}", filtered[i], data[i]);
    }
}

#[test]
fn test_butter_filter_short_inputs() {
    assert!(butter_lowpass_filter(&[], 5.0, 100.0, 2).unwrap().is_empty());
    let single = butter_lowpass_filter(&[4.0], 5.0, 100.0, 2).unwrap();
    assert!((single[0] - 4.0).abs() < 1e-12);
}
