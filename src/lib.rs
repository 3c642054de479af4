//! Joukowsky airfoil generation, ideal potential flow around the generating cylinder, and export
//! and plotting of the results.

pub mod airfoil;
pub mod errors;
pub mod export;
pub mod flow;
pub mod geometry;
pub mod plot;
pub mod serialize;
pub mod transform;

pub use airfoil::generate::generate;
pub use airfoil::{AirfoilSpec, CylinderCurve, FoilCurve};
pub use errors::{FoilError, FoilResult};
