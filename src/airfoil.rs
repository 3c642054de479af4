use crate::errors::{FoilError, FoilResult};
use crate::geometry::distances2::{dist, max_extent};
use itertools::{Itertools, MinMaxResult};
use ncollide2d::na::Point2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod generate;
pub mod lift;

const DEFAULT_SAMPLES: usize = 100;

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

/// Raw, unvalidated form of an `AirfoilSpec` as it appears in a configuration file.
#[derive(Deserialize)]
struct SpecParams {
    a: f64,
    t: f64,
    beta: f64,
    #[serde(default)]
    alpha: f64,
    #[serde(default = "default_samples")]
    n: usize,
}

impl TryFrom<SpecParams> for AirfoilSpec {
    type Error = FoilError;

    fn try_from(p: SpecParams) -> Result<Self, Self::Error> {
        AirfoilSpec::new(p.a, p.t, p.beta, p.n)?.with_attack(p.alpha)
    }
}

/// The immutable set of parameters which fully determines a Joukowsky airfoil. A value of this
/// type is always valid; every constructor (including deserialization) checks the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpecParams")]
pub struct AirfoilSpec {
    a: f64,
    t: f64,
    beta: f64,
    alpha: f64,
    n: usize,
}

impl AirfoilSpec {
    /// Create a new airfoil specification with a zero angle of attack.
    ///
    /// # Arguments
    ///
    /// * `a` - radius of the cylinder before the transformation, roughly a quarter of the final
    /// chord length. Must be positive.
    ///
    /// * `t` - thickness ratio, the map constant divided by the cylinder radius. Must lie in the
    /// open interval (0, 1); values close to 0.9 give typical airfoils.
    ///
    /// * `beta` - curvature (camber) angle in degrees
    ///
    /// * `n` - number of samples along the outline, at least 3
    pub fn new(a: f64, t: f64, beta: f64, n: usize) -> FoilResult<AirfoilSpec> {
        if !(a.is_finite() && a > 0.0) {
            return Err(FoilError::invalid(
                "a",
                format!("cylinder radius must be positive, got {}", a),
            ));
        }

        if !(t > 0.0 && t < 1.0) {
            return Err(FoilError::invalid(
                "t",
                format!("must lie in the open interval (0, 1), got {}", t),
            ));
        }

        if !beta.is_finite() {
            return Err(FoilError::invalid("beta", "curvature angle must be finite"));
        }

        if n < 3 {
            return Err(FoilError::invalid(
                "n",
                format!("at least 3 samples are required, got {}", n),
            ));
        }

        Ok(AirfoilSpec {
            a,
            t,
            beta,
            alpha: 0.0,
            n,
        })
    }

    /// Return a copy of this specification with the angle of attack (degrees) replaced
    pub fn with_attack(self, alpha: f64) -> FoilResult<AirfoilSpec> {
        if !alpha.is_finite() {
            return Err(FoilError::invalid("alpha", "attack angle must be finite"));
        }

        Ok(AirfoilSpec { alpha, ..self })
    }

    /// Load and validate a specification from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> FoilResult<AirfoilSpec> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// Curvature angle in degrees
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Attack angle in degrees
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn beta_rad(&self) -> f64 {
        self.beta.to_radians()
    }

    pub fn alpha_rad(&self) -> f64 {
        self.alpha.to_radians()
    }

    /// The Joukowsky map constant, b = a * t
    pub fn b(&self) -> f64 {
        self.a * self.t
    }

    /// Center of the pre-transformation cylinder, a * (e^{i beta} - t)
    pub fn center(&self) -> Complex64 {
        self.a * (Complex64::cis(self.beta_rad()) - self.t)
    }
}

/// The sampled circle in the pre-transformation plane. Samples are equally spaced in `theta` over
/// the closed interval [0, 2pi], so the first and last points coincide.
#[derive(Debug, Clone)]
pub struct CylinderCurve {
    pub theta: Vec<f64>,
    pub points: Vec<Complex64>,
    pub center: Complex64,
    pub radius: f64,
}

impl CylinderCurve {
    pub fn from_spec(spec: &AirfoilSpec) -> CylinderCurve {
        let n = spec.n();
        let center = spec.center();
        let step = std::f64::consts::TAU / (n - 1) as f64;

        let theta: Vec<f64> = (0..n).map(|k| k as f64 * step).collect();
        let points = theta
            .iter()
            .map(|th| spec.a() * Complex64::cis(*th) + center)
            .collect();

        CylinderCurve {
            theta,
            points,
            center,
            radius: spec.a(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The airfoil outline, in the same order as the cylinder samples it was mapped from.
#[derive(Debug, Clone)]
pub struct FoilCurve {
    points: Vec<Complex64>,
}

impl FoilCurve {
    pub(crate) fn new(points: Vec<Complex64>) -> FoilCurve {
        FoilCurve { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Complex64] {
        &self.points
    }

    /// Convert the outline into 2D points for rendering or geometric queries
    pub fn to_points(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|z| Point2::new(z.re, z.im)).collect()
    }

    /// Check whether the first and last points of the outline coincide within `tol`
    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) => {
                dist(&Point2::new(f.re, f.im), &Point2::new(l.re, l.im)) <= tol
            }
            _ => false,
        }
    }

    /// The axis aligned bounds of the outline as (min, max)
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let xs = self.points.iter().map(|z| z.re).minmax();
        let ys = self.points.iter().map(|z| z.im).minmax();
        match (xs, ys) {
            (MinMaxResult::MinMax(x0, x1), MinMaxResult::MinMax(y0, y1)) => {
                Some((Point2::new(x0, y0), Point2::new(x1, y1)))
            }
            (MinMaxResult::OneElement(x), MinMaxResult::OneElement(y)) => {
                Some((Point2::new(x, y), Point2::new(x, y)))
            }
            _ => None,
        }
    }

    /// Length of the chord, taken as the largest distance between any two outline points
    pub fn chord_length(&self) -> f64 {
        max_extent(&self.to_points())
    }
}
