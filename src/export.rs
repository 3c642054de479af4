//! Writing airfoil outlines to delimited text and JSON files, and reading delimited text back.

use crate::airfoil::{AirfoilSpec, FoilCurve};
use crate::errors::{FoilError, FoilResult};
use crate::serialize::PointRecord;
use ncollide2d::na::Point2;
use num_complex::Complex64;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const CSV_HEADER: &str = "x;y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Semicolon delimited with an `x;y` header line
    Csv,

    /// Space delimited, no header
    Plain,
}

impl ExportFormat {
    /// `.csv` files (any case) get the CSV format, everything else the plain one
    pub fn for_path(path: &Path) -> ExportFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Plain,
        }
    }

    fn delimiter(&self) -> char {
        match self {
            ExportFormat::Csv => ';',
            ExportFormat::Plain => ' ',
        }
    }
}

/// Write points one per line with six decimal digits
pub fn write_points<W: Write>(points: &[Complex64], writer: &mut W, format: ExportFormat) -> FoilResult<()> {
    if format == ExportFormat::Csv {
        writeln!(writer, "{}", CSV_HEADER)?;
    }

    let d = format.delimiter();
    for p in points.iter() {
        writeln!(writer, "{:.6}{}{:.6}", p.re, d, p.im)?;
    }

    Ok(())
}

/// Write the outline to `path`, choosing the format from the file extension
pub fn export<P: AsRef<Path>>(curve: &FoilCurve, path: P) -> FoilResult<()> {
    let path = path.as_ref();
    let format = ExportFormat::for_path(path);
    let mut writer = BufWriter::new(File::create(path)?);
    write_points(curve.points(), &mut writer, format)?;
    writer.flush()?;

    log::info!("Wrote {} points to {:?} ({:?})", curve.len(), path, format);
    Ok(())
}

/// Read points written by `export` (either format). Blank lines and a leading `x;y` header are
/// skipped.
pub fn read_points<P: AsRef<Path>>(path: P) -> FoilResult<Vec<Complex64>> {
    let reader = BufReader::new(File::open(path)?);
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || (index == 0 && trimmed == CSV_HEADER) {
            continue;
        }

        points.push(parse_point(trimmed).ok_or_else(|| FoilError::Parse {
            line: index + 1,
            content: line.clone(),
        })?);
    }

    Ok(points)
}

fn parse_point(text: &str) -> Option<Complex64> {
    let mut fields = text
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter(|f| !f.is_empty());

    let x = fields.next()?.parse::<f64>().ok()?;
    let y = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }

    Some(Complex64::new(x, y))
}

#[derive(Serialize)]
struct FoilDocument<'a> {
    spec: &'a AirfoilSpec,
    points: Vec<PointRecord>,
}

/// Write the spec together with the outline it produced as a JSON document
pub fn export_json<P: AsRef<Path>>(spec: &AirfoilSpec, curve: &FoilCurve, path: P) -> FoilResult<()> {
    let path = path.as_ref();
    let document = FoilDocument {
        spec,
        points: curve
            .points()
            .iter()
            .map(|z| PointRecord(Point2::new(z.re, z.im)))
            .collect(),
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;

    log::info!("Wrote JSON outline to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;
    use approx::assert_relative_eq;
    use std::path::PathBuf;
    use test_case::test_case;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("joukowsky_{}_{}", std::process::id(), name))
    }

    fn sample_curve() -> (AirfoilSpec, FoilCurve) {
        let spec = AirfoilSpec::new(1.0, 0.9, 5.0, 100).unwrap();
        let curve = generate(&spec).unwrap();
        (spec, curve)
    }

    #[test_case("foil.csv", ExportFormat::Csv)]
    #[test_case("FOIL.CSV", ExportFormat::Csv)]
    #[test_case("foil.txt", ExportFormat::Plain)]
    #[test_case("foil", ExportFormat::Plain)]
    #[test_case("foil.csv.bak", ExportFormat::Plain)]
    fn test_format_from_extension(name: &str, e: ExportFormat) {
        assert_eq!(e, ExportFormat::for_path(Path::new(name)));
    }

    #[test]
    fn test_csv_layout() {
        let points = [Complex64::new(1.0, -0.5), Complex64::new(0.1234567, 2.0)];
        let mut buffer = Vec::new();
        write_points(&points, &mut buffer, ExportFormat::Csv).unwrap();
        assert_eq!(
            "x;y\n1.000000;-0.500000\n0.123457;2.000000\n",
            String::from_utf8(buffer).unwrap()
        );
    }

    #[test]
    fn test_plain_layout() {
        let points = [Complex64::new(-3.0, 0.25)];
        let mut buffer = Vec::new();
        write_points(&points, &mut buffer, ExportFormat::Plain).unwrap();
        assert_eq!("-3.000000 0.250000\n", String::from_utf8(buffer).unwrap());
    }

    #[test_case("round_trip.csv")]
    #[test_case("round_trip.dat")]
    fn test_export_round_trip(name: &str) {
        let (_, curve) = sample_curve();
        let path = temp_path(name);
        export(&curve, &path).unwrap();

        let back = read_points(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(curve.len(), back.len());
        for (a, b) in curve.points().iter().zip(back.iter()) {
            assert_relative_eq!(a.re, b.re, epsilon = 5e-7);
            assert_relative_eq!(a.im, b.im, epsilon = 5e-7);
        }
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let (_, curve) = sample_curve();
        let path = temp_path("no_such_dir").join("foil.csv");
        assert!(matches!(export(&curve, path), Err(FoilError::Io(_))));
    }

    #[test]
    fn test_read_reports_malformed_line() {
        let path = temp_path("malformed.csv");
        std::fs::write(&path, "x;y\n1.0;2.0\n3.0;abc\n").unwrap();
        let result = read_points(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(FoilError::Parse { line, content }) => {
                assert_eq!(3, line);
                assert_eq!("3.0;abc", content);
            }
            _ => panic!("expected a parse error"),
        }
    }

    #[test]
    fn test_export_json_document() {
        let (spec, curve) = sample_curve();
        let path = temp_path("foil.json");
        export_json(&spec, &curve, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(100, value["points"].as_array().unwrap().len());
        assert_relative_eq!(0.9, value["spec"]["t"].as_f64().unwrap());
        assert_relative_eq!(
            curve.points()[0].re,
            value["points"][0]["x"].as_f64().unwrap()
        );

        let reloaded: AirfoilSpec = serde_json::from_value(value["spec"].clone()).unwrap();
        assert_eq!(spec, reloaded);
    }
}
