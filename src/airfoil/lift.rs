//! Thin airfoil lift for Joukowsky sections.

use crate::airfoil::AirfoilSpec;
use crate::errors::{FoilError, FoilResult};
use serde::Serialize;
use std::f64::consts::PI;

pub const DEFAULT_MIN_ALPHA: f64 = -5.0;
pub const DEFAULT_MAX_ALPHA: f64 = 5.0;
pub const DEFAULT_SWEEP_SAMPLES: usize = 50;

/// Lift coefficient `2 pi sin(alpha + beta)`, both angles in radians
pub fn lift_coefficient(alpha: f64, beta: f64) -> f64 {
    2.0 * PI * (alpha + beta).sin()
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LiftPoint {
    /// Angle of attack in degrees
    pub alpha: f64,
    pub cl: f64,
}

/// Sample the lift curve at `n` equally spaced angles of attack between `min_alpha` and
/// `max_alpha` (inclusive, degrees) for a section with curvature `beta` (degrees).
pub fn lift_sweep(beta: f64, min_alpha: f64, max_alpha: f64, n: usize) -> FoilResult<Vec<LiftPoint>> {
    if n < 2 {
        return Err(FoilError::invalid(
            "n",
            format!("a lift sweep needs at least 2 samples, got {}", n),
        ));
    }

    if !beta.is_finite() {
        return Err(FoilError::invalid("beta", "curvature angle must be finite"));
    }

    if !(min_alpha.is_finite() && max_alpha.is_finite() && min_alpha < max_alpha) {
        return Err(FoilError::invalid(
            "alpha",
            format!("invalid sweep range [{}, {}]", min_alpha, max_alpha),
        ));
    }

    Ok(sample(beta.to_radians(), min_alpha, max_alpha, n))
}

fn sample(beta: f64, min_alpha: f64, max_alpha: f64, n: usize) -> Vec<LiftPoint> {
    let step = (max_alpha - min_alpha) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let alpha = min_alpha + i as f64 * step;
            LiftPoint {
                alpha,
                cl: lift_coefficient(alpha.to_radians(), beta),
            }
        })
        .collect()
}

impl AirfoilSpec {
    /// Lift coefficient of this section at its own angle of attack
    pub fn lift_coefficient(&self) -> f64 {
        lift_coefficient(self.alpha_rad(), self.beta_rad())
    }

    /// Lift curve of this section over the default range of -5 to 5 degrees
    pub fn lift_curve(&self) -> Vec<LiftPoint> {
        sample(
            self.beta_rad(),
            DEFAULT_MIN_ALPHA,
            DEFAULT_MAX_ALPHA,
            DEFAULT_SWEEP_SAMPLES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;
    use test_case::test_case;

    #[test]
    fn test_zero_lift_without_attack_or_camber() {
        assert_eq!(0.0, lift_coefficient(0.0, 0.0));
    }

    #[test_case(0.1, 0.0, 0.627272)]
    #[test_case(0.0, FRAC_PI_2, 6.283185)]
    #[test_case(-0.05, 0.05, 0.0)]
    fn test_lift_values(alpha: f64, beta: f64, e: f64) {
        assert_relative_eq!(e, lift_coefficient(alpha, beta), epsilon = 1e-6);
    }

    #[test]
    fn test_lift_increases_below_stall_angle() {
        let n = 1000;
        let lo = -FRAC_PI_2 + 1e-3;
        let hi = FRAC_PI_2 - 1e-3;
        let mut last = f64::MIN;
        for i in 0..n {
            let x = lo + (hi - lo) * i as f64 / (n - 1) as f64;
            let cl = lift_coefficient(x - 0.2, 0.2);
            assert!(cl > last);
            last = cl;
        }
    }

    #[test]
    fn test_sweep_endpoints_and_count() {
        let sweep = lift_sweep(5.0, -5.0, 5.0, 50).unwrap();
        assert_eq!(50, sweep.len());
        assert_relative_eq!(-5.0, sweep[0].alpha);
        assert_relative_eq!(5.0, sweep[49].alpha, epsilon = 1e-12);
        assert_relative_eq!(0.0, sweep[0].cl, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_matches_spec_curve() {
        let spec = AirfoilSpec::new(1.0, 0.9, 3.0, 100).unwrap();
        let a = spec.lift_curve();
        let b = lift_sweep(3.0, DEFAULT_MIN_ALPHA, DEFAULT_MAX_ALPHA, DEFAULT_SWEEP_SAMPLES).unwrap();
        for (p, q) in a.iter().zip(b.iter()) {
            assert_relative_eq!(p.alpha, q.alpha);
            assert_relative_eq!(p.cl, q.cl);
        }
    }

    #[test]
    fn test_sweep_rejects_bad_input() {
        assert!(lift_sweep(0.0, -5.0, 5.0, 1).is_err());
        assert!(lift_sweep(0.0, 5.0, -5.0, 10).is_err());
    }

    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_sweep_rejects_non_finite_camber(beta: f64) {
        assert!(matches!(
            lift_sweep(beta, -5.0, 5.0, 10),
            Err(FoilError::InvalidParameter { name: "beta", .. })
        ));
    }
}
