use crate::airfoil::{AirfoilSpec, CylinderCurve, FoilCurve};
use crate::errors::FoilResult;
use crate::transform::{joukowsky, rotate};
use num_complex::Complex64;

/// An AirfoilGenerator is an entity which produces a sampled circle and a conformal map which
/// turns that circle into an airfoil outline. This provides the information necessary to compute
/// the outline at the angle of attack held in the spec.
pub trait AirfoilGenerator {
    /// The parameters this generator was built from
    fn spec(&self) -> &AirfoilSpec;

    /// Return the sampled circle in the pre-transformation plane
    fn cylinder(&self) -> CylinderCurve;

    /// Map a single point of the circle plane into the airfoil plane
    fn map(&self, z: Complex64) -> FoilResult<Complex64>;

    /// Maps every cylinder sample, keeping the sampling order, and rotates the result by the
    /// angle of attack
    fn generate(&self) -> FoilResult<FoilCurve> {
        let alpha = self.spec().alpha_rad();
        let points = self
            .cylinder()
            .points
            .into_iter()
            .map(|z| self.map(z).map(|w| rotate(w, alpha)))
            .collect::<FoilResult<Vec<_>>>()?;

        Ok(FoilCurve::new(points))
    }
}

/// A generator for the classic Joukowsky airfoil, where the circle of radius `a` centered on
/// `a * (e^{i beta} - t)` is mapped through `z + b^2 / z` with `b = a * t`.
pub struct Joukowsky {
    spec: AirfoilSpec,
}

impl Joukowsky {
    pub fn new(spec: AirfoilSpec) -> Joukowsky {
        Joukowsky { spec }
    }
}

impl AirfoilGenerator for Joukowsky {
    fn spec(&self) -> &AirfoilSpec {
        &self.spec
    }

    fn cylinder(&self) -> CylinderCurve {
        CylinderCurve::from_spec(&self.spec)
    }

    fn map(&self, z: Complex64) -> FoilResult<Complex64> {
        joukowsky(z, self.spec.b())
    }
}

/// Generate the airfoil outline described by `spec`
pub fn generate(spec: &AirfoilSpec) -> FoilResult<FoilCurve> {
    log::debug!(
        "Generating Joukowsky outline with {} samples (b = {:.6})",
        spec.n(),
        spec.b()
    );
    Joukowsky::new(*spec).generate()
}
