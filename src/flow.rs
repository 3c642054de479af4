//! Ideal potential flow past the pre-transformation cylinder. The flow is a superposition of a
//! uniform current, a dipole and a point vortex whose circulation satisfies the Kutta condition.
//! Values are computed in the circle plane and carried into the airfoil plane through the
//! Joukowsky map for drawing.
//!
//! The vortex term uses the principal branch of the complex logarithm. Across the negative real
//! axis (relative to the cylinder center) the velocity potential `Re F` jumps by the circulation.
//! The stream function `Im F` is continuous there.

use crate::airfoil::AirfoilSpec;
use crate::errors::{FoilError, FoilResult};
use crate::transform::joukowsky;
use itertools::Itertools;
use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Circulation which places the rear stagnation point on the trailing edge, `4 pi a V sin(alpha + beta)`
pub fn circulation(a: f64, velocity: f64, alpha: f64, beta: f64) -> f64 {
    4.0 * PI * a * velocity * (alpha + beta).sin()
}

pub fn uniform_current(z: Complex64, velocity: f64, alpha: f64) -> Complex64 {
    velocity * z * Complex64::cis(alpha)
}

pub fn dipole(z: Complex64, velocity: f64, a: f64) -> Complex64 {
    velocity * a * a / z
}

pub fn rotor(z: Complex64, circulation: f64) -> Complex64 {
    Complex64::new(0.0, -1.0 / (2.0 * PI)) * circulation * z.ln()
}

/// Complex potential at `z`, measured from the cylinder center
pub fn complex_potential(
    z: Complex64,
    velocity: f64,
    alpha: f64,
    a: f64,
    circulation: f64,
) -> Complex64 {
    uniform_current(z, velocity, alpha) + dipole(z, velocity, a) - rotor(z, circulation)
}

/// A rectilinear sampling grid in the circle plane. Rows follow `y`, columns follow `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGrid {
    x_range: (f64, f64),
    y_range: (f64, f64),
    nx: usize,
    ny: usize,
}

impl FlowGrid {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), nx: usize, ny: usize) -> FoilResult<Self> {
        if nx < 2 || ny < 2 {
            return Err(FoilError::invalid(
                "grid",
                format!("at least 2 x 2 samples are required, got {} x {}", nx, ny),
            ));
        }

        for (name, (lo, hi)) in [("x_range", x_range), ("y_range", y_range)] {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(FoilError::invalid(
                    name,
                    format!("expected an increasing finite range, got [{}, {}]", lo, hi),
                ));
            }
        }

        Ok(FlowGrid {
            x_range,
            y_range,
            nx,
            ny,
        })
    }

    /// A square grid centered on the cylinder of `spec`, reaching `extent` radii in each direction
    pub fn around(spec: &AirfoilSpec, extent: f64, nx: usize, ny: usize) -> FoilResult<Self> {
        if !(extent.is_finite() && extent > 0.0) {
            return Err(FoilError::invalid(
                "extent",
                format!("must be positive, got {}", extent),
            ));
        }

        let c = spec.center();
        let h = extent * spec.a();
        FlowGrid::new((c.re - h, c.re + h), (c.im - h, c.im + h), nx, ny)
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    pub fn x(&self, i: usize) -> f64 {
        let (lo, hi) = self.x_range;
        lo + (hi - lo) * i as f64 / (self.nx - 1) as f64
    }

    pub fn y(&self, j: usize) -> f64 {
        let (lo, hi) = self.y_range;
        lo + (hi - lo) * j as f64 / (self.ny - 1) as f64
    }

    pub fn point(&self, j: usize, i: usize) -> Complex64 {
        Complex64::new(self.x(i), self.y(j))
    }
}

pub struct FlowField {
    pub grid: FlowGrid,

    /// Sample positions in the circle plane
    pub z: Array2<Complex64>,

    /// Sample positions carried into the airfoil plane, zero where masked
    pub mapped: Array2<Complex64>,

    /// Complex potential, zero where masked
    pub potential: Array2<Complex64>,

    /// True where the sample lies inside the cylinder, or on the singular point of the map
    pub inside: Array2<bool>,

    pub circulation: f64,
}

impl FlowField {
    /// The stream function `Im F`; its iso-lines are the streamlines
    pub fn stream_function(&self) -> Array2<f64> {
        self.potential.mapv(|f| f.im)
    }

    /// The velocity potential `Re F`, discontinuous across the vortex branch cut
    pub fn velocity_potential(&self) -> Array2<f64> {
        self.potential.mapv(|f| f.re)
    }

    /// `count` stream function levels evenly spaced strictly between the extremes of the samples
    /// outside the body
    pub fn stream_levels(&self, count: usize) -> Vec<f64> {
        let extremes = self
            .potential
            .iter()
            .zip(self.inside.iter())
            .filter(|(_, inside)| !**inside)
            .map(|(f, _)| f.im)
            .minmax()
            .into_option();

        match extremes {
            Some((lo, hi)) if hi > lo => (0..count)
                .map(|k| lo + (hi - lo) * (k + 1) as f64 / (count + 1) as f64)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Evaluate the complex potential of the flow around the cylinder of `spec` on `grid`.
///
/// # Arguments
///
/// * `velocity` - free stream speed
///
/// * `attack` - angle of attack of the oncoming flow in degrees
pub fn field(spec: &AirfoilSpec, velocity: f64, attack: f64, grid: &FlowGrid) -> FoilResult<FlowField> {
    if !velocity.is_finite() {
        return Err(FoilError::invalid("velocity", "free stream speed must be finite"));
    }
    if !attack.is_finite() {
        return Err(FoilError::invalid("alpha", "attack angle must be finite"));
    }

    let a = spec.a();
    let alpha = attack.to_radians();
    let center = spec.center();
    let gamma = circulation(a, velocity, alpha, spec.beta_rad());

    let z = Array2::from_shape_fn(grid.shape(), |(j, i)| grid.point(j, i));
    let mut inside = z.mapv(|p| (p - center).norm() < a);

    let mut potential = Array2::<Complex64>::zeros(grid.shape());
    let mut mapped = Array2::<Complex64>::zeros(grid.shape());
    for ((j, i), p) in z.indexed_iter() {
        if inside[[j, i]] {
            continue;
        }
        // The map is only needed for drawing; a sample it cannot carry is masked like the body
        match joukowsky(*p, spec.b()) {
            Ok(w) => {
                mapped[[j, i]] = w;
                potential[[j, i]] = complex_potential(p - center, velocity, alpha, a, gamma);
            }
            Err(_) => {
                log::debug!("Masking flow sample at {} on the map singularity", p);
                inside[[j, i]] = true;
            }
        }
    }

    log::debug!(
        "Evaluated flow field on {} x {} grid (circulation = {:.6})",
        grid.nx(),
        grid.ny(),
        gamma
    );

    Ok(FlowField {
        grid: grid.clone(),
        z,
        mapped,
        potential,
        inside,
        circulation: gamma,
    })
}
