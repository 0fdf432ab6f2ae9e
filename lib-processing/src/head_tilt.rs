use math::*;

use crate::*;

/// Angle of the rotation of the reference frame around x after which `v` lies in the xz plane.
/// Of the two candidate angles (v landing on the +z or on the -z side) the one with the smallest
/// magnitude is returned, in degrees or radians.
/// 
pub fn angle_x_to_xz(v: &Vector, degrees: bool) -> f64 {
    let towards_z = libm::atan2(-v.y, v.z);
    let towards_minus_z = libm::atan2(v.y, -v.z);

    let theta = if libm::fabs(towards_z) < libm::fabs(towards_minus_z) { towards_z } else { towards_minus_z };
    if degrees { theta * RAD_TO_DEG } else { theta }
}

/// Rotate each vector by the inverse of the matching orientation quaternion, e.g. to express head
/// referential vectors in the sensor frame.
/// 
pub fn q_inv_rotate_v(quaternions: &[Quaternion], vectors: &[Vector]) -> Result<Vec<Vector>, ProcessingError> {
    check_aligned(quaternions.len(), vectors.len())?;
    Ok(quaternions
        .iter()
        .zip(vectors)
        .map(|(q, v)| q.inverse_rotate(v))
        .collect())
}
