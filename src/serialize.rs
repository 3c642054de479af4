use ncollide2d::na::Point2;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// A single outline point as it appears in a JSON document
#[derive(Serialize)]
pub struct PointRecord(#[serde(with = "Point2f64")] pub Point2<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_record_json() {
        let text = serde_json::to_string(&PointRecord(Point2::new(1.5, -0.25))).unwrap();
        assert_eq!(r#"{"x":1.5,"y":-0.25}"#, text);
    }
}
