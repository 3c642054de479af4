use ncollide2d::na::Point2;
use ndarray::Array2;
use num_complex::Complex64;

/// Find where the level crosses the edge between two corner samples, if it does
fn edge_crossing(
    v0: f64,
    v1: f64,
    p0: Complex64,
    p1: Complex64,
    level: f64,
) -> Option<Point2<f64>> {
    if (v0 >= level) == (v1 >= level) {
        return None;
    }

    let f = (level - v0) / (v1 - v0);
    let p = p0 + (p1 - p0) * f;
    Some(Point2::new(p.re, p.im))
}

/// Extract the line segments of the iso-line `values == level` with marching squares. The cells
/// are walked in index space while the segment end points are interpolated in `positions`, so the
/// grid may be curvilinear (e.g. a rectangular grid carried through a conformal map). Cells with
/// any masked corner are skipped.
pub fn iso_segments(
    values: &Array2<f64>,
    positions: &Array2<Complex64>,
    mask: &Array2<bool>,
    level: f64,
) -> Vec<[Point2<f64>; 2]> {
    let (rows, cols) = values.dim();
    let mut segments = Vec::new();
    if rows < 2 || cols < 2 {
        return segments;
    }

    for j in 0..rows - 1 {
        for i in 0..cols - 1 {
            let corners = [[j, i], [j, i + 1], [j + 1, i + 1], [j + 1, i]];
            if corners.iter().any(|c| mask[*c]) {
                continue;
            }

            let crossings: Vec<Point2<f64>> = (0..4)
                .filter_map(|k| {
                    let c0 = corners[k];
                    let c1 = corners[(k + 1) % 4];
                    edge_crossing(values[c0], values[c1], positions[c0], positions[c1], level)
                })
                .collect();

            // Saddle cells cross all four edges and are split into two segments
            for pair in crossings.chunks_exact(2) {
                segments.push([pair[0], pair[1]]);
            }
        }
    }

    segments
}
