use core::f64::consts::PI;

use math::*;

use crate::*;

#[test]
fn test_angle_x_to_xz_smallest_candidate() {
    assert!(angle_x_to_xz(&Vector::new(0.3, 0.0, 1.0), true).abs() < 1e-12);
    assert!((angle_x_to_xz(&Vector::new(0.0, 1.0, 1.0), true) + 45.0).abs() < 1e-9);
    assert!((angle_x_to_xz(&Vector::new(0.0, 1.0, -1.0), true) - 45.0).abs() < 1e-9);
    assert!((angle_x_to_xz(&Vector::new(0.0, 1.0, 1.0), false) + PI / 4.0).abs() < 1e-12);
}

#[test]
fn test_angle_x_to_xz_brings_vector_into_plane() {
    let x_axis = Vector::new(1.0, 0.0, 0.0);
    for v in [Vector::new(0.2, 0.7, 0.4), Vector::new(-0.5, -0.3, -0.9), Vector::new(0.1, -2.0, 0.3)] {
        let theta = angle_x_to_xz(&v, false);
        assert!(theta.abs() <= PI / 2.0 + 1e-12);
        let in_frame = Quaternion::from_axis_angle(&x_axis, theta).inverse_rotate(&v);
        assert!(in_frame.y.abs() < 1e-12, "{:?}", in_frame);
    }
}

#[test]
fn test_q_inv_rotate_v() {
    let quarter_turn = Quaternion::from_axis_angle(&Vector::new(0.0, 0.0, 1.0), PI / 2.0);
    let rotated = q_inv_rotate_v(
        &[Quaternion::identity(), quarter_turn],
        &[Vector::new(1.0, 2.0, 3.0), Vector::new(1.0, 0.0, 0.0)],
    ).unwrap();
    assert!(rotated[0].approx_eq(&Vector::new(1.0, 2.0, 3.0), 1e-12));
    assert!(rotated[1].approx_eq(&Vector::new(0.0, -1.0, 0.0), 1e-12));
}

#[test]
fn test_q_inv_rotate_v_misaligned() {
    let result = q_inv_rotate_v(&[Quaternion::identity()], &[]);
    assert_eq!(result, Err(ProcessingError::LengthMismatch { expected: 1, found: 0 }));
}
