//! Conformal mapping and rigid rotations in the complex plane.

use crate::errors::{FoilError, FoilResult};
use num_complex::Complex64;

/// Apply the Joukowsky map `f(z) = z + b^2 / z`.
///
/// The map is singular at the origin. Rather than letting an infinite or NaN value leak into the
/// outline, a `SingularMapping` error is returned when `z` is zero or the result is not finite.
pub fn joukowsky(z: Complex64, b: f64) -> FoilResult<Complex64> {
    if z.norm_sqr() == 0.0 {
        return Err(FoilError::SingularMapping { re: z.re, im: z.im });
    }

    let w = z + b * b / z;
    if w.is_finite() {
        Ok(w)
    } else {
        Err(FoilError::SingularMapping { re: z.re, im: z.im })
    }
}

/// Rotate a point about the origin by `angle` radians (multiplication by `e^{i angle}`)
pub fn rotate(z: Complex64, angle: f64) -> Complex64 {
    z * Complex64::cis(angle)
}
