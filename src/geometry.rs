pub mod contour;
pub mod distances2;
