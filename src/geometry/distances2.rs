use ncollide2d::na::{Point2, RealField};
use ncollide2d::shape::ConvexPolygon;

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Find the indices of the farthest pair of points on a convex polygon
pub fn farthest_pair_indices<N: RealField + Copy>(hull: &ConvexPolygon<N>) -> (usize, usize) {
    let mut i0: usize = 0;
    let mut i1: usize = 0;
    let mut dist: N = N::zero();
    for i in 0..hull.points().len() {
        for j in (i + 1)..hull.points().len() {
            let d: N = (hull.points()[i] - hull.points()[j]).norm();
            if d > dist {
                dist = d;
                i0 = i;
                i1 = j;
            }
        }
    }

    (i0, i1)
}

/// Return the largest distance between any two of the points, measured across their convex hull.
/// Degenerate (collinear) point sets fall back to a direct pairwise search.
pub fn max_extent(points: &[Point2<f64>]) -> f64 {
    match ConvexPolygon::try_from_points(points) {
        Some(hull) => {
            let (i0, i1) = farthest_pair_indices(&hull);
            dist(&hull.points()[i0], &hull.points()[i1])
        }
        None => {
            let mut farthest = 0.0;
            for (i, a) in points.iter().enumerate() {
                for b in points.iter().skip(i + 1) {
                    farthest = dist(a, b).max(farthest);
                }
            }
            farthest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case((0.0, 0.0), (3.0, 4.0), 5.0)]
    #[test_case((-1.0, 2.0), (-1.0, -2.0), 4.0)]
    #[test_case((1.5, 1.5), (1.5, 1.5), 0.0)]
    fn test_dist(a: (f64, f64), b: (f64, f64), e: f64) {
        let r = dist(&Point2::new(a.0, a.1), &Point2::new(b.0, b.1));
        assert_relative_eq!(e, r, epsilon = 1e-12);
    }

    #[test]
    fn test_max_extent_square() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
        ];
        assert_relative_eq!(2.0_f64.sqrt(), max_extent(&points), epsilon = 1e-12);
    }
}
