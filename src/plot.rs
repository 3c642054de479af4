use crate::airfoil::lift::LiftPoint;
use crate::airfoil::FoilCurve;
use crate::errors::{FoilError, FoilResult};
use crate::flow::FlowField;
use crate::geometry::contour::iso_segments;
use itertools::Itertools;
use ncollide2d::na::Point2;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    pub title: Option<String>,
    pub grid: bool,
}

impl PlotOptions {
    pub fn titled(title: &str) -> Self {
        PlotOptions {
            title: Some(title.to_string()),
            grid: false,
        }
    }

    pub fn with_grid(self) -> Self {
        PlotOptions { grid: true, ..self }
    }
}

/// Expand the box spanned by `lo` and `hi` so that one unit covers the same number of pixels on
/// both axes of a `width` x `height` drawing, with `pad` relative margin around the data.
pub fn equal_aspect(
    lo: Point2<f64>,
    hi: Point2<f64>,
    (width, height): (u32, u32),
    pad: f64,
) -> (Range<f64>, Range<f64>) {
    let cx = (lo.x + hi.x) / 2.0;
    let cy = (lo.y + hi.y) / 2.0;
    let mut dx = (hi.x - lo.x).max(f64::EPSILON) * (1.0 + pad);
    let mut dy = (hi.y - lo.y).max(f64::EPSILON) * (1.0 + pad);

    let aspect = width.max(1) as f64 / height.max(1) as f64;
    if dx / dy > aspect {
        dy = dx / aspect;
    } else {
        dx = dy * aspect;
    }

    (
        (cx - dx / 2.0)..(cx + dx / 2.0),
        (cy - dy / 2.0)..(cy + dy / 2.0),
    )
}

/// Something which can be drawn onto any plotters backend
trait Scene {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> FoilResult<()>;
}

struct FoilScene<'a> {
    curve: &'a FoilCurve,
    options: &'a PlotOptions,
}

impl<'a> Scene for FoilScene<'a> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> FoilResult<()> {
        root.fill(&WHITE)?;
        let (lo, hi) = self
            .curve
            .bounds()
            .ok_or_else(|| FoilError::invalid("curve", "cannot plot an empty outline"))?;
        let (xr, yr) = equal_aspect(lo, hi, root.dim_in_pixel(), 0.1);

        let mut builder = ChartBuilder::on(root);
        builder.margin(20).x_label_area_size(30).y_label_area_size(40);
        if let Some(title) = &self.options.title {
            builder.caption(title, ("sans-serif", 24));
        }

        let mut chart = builder.build_cartesian_2d(xr, yr)?;
        let mut mesh = chart.configure_mesh();
        if !self.options.grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        chart.draw_series(LineSeries::new(
            self.curve.points().iter().map(|z| (z.re, z.im)),
            &BLUE,
        ))?;
        Ok(())
    }
}

struct LiftScene<'a> {
    sweep: &'a [LiftPoint],
}

impl<'a> Scene for LiftScene<'a> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> FoilResult<()> {
        root.fill(&WHITE)?;
        let (a0, a1) = self
            .sweep
            .iter()
            .map(|p| p.alpha)
            .minmax()
            .into_option()
            .ok_or_else(|| FoilError::invalid("sweep", "cannot plot an empty lift sweep"))?;
        let (c0, c1) = self
            .sweep
            .iter()
            .map(|p| p.cl)
            .minmax()
            .into_option()
            .ok_or_else(|| FoilError::invalid("sweep", "cannot plot an empty lift sweep"))?;
        let pad = (0.1 * (c1 - c0)).max(1e-3);

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(a0..a1.max(a0 + 1e-9), (c0 - pad)..(c1 + pad))?;

        chart
            .configure_mesh()
            .x_desc("alpha (°)")
            .y_desc("cL")
            .draw()?;

        chart.draw_series(LineSeries::new(
            self.sweep.iter().map(|p| (p.alpha, p.cl)),
            &RED,
        ))?;
        Ok(())
    }
}

struct StreamlineScene<'a> {
    field: &'a FlowField,
    curve: &'a FoilCurve,
    levels: usize,
}

impl<'a> Scene for StreamlineScene<'a> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> FoilResult<()> {
        root.fill(&WHITE)?;
        let outside: Vec<_> = self
            .field
            .mapped
            .iter()
            .zip(self.field.inside.iter())
            .filter(|(_, inside)| !**inside)
            .map(|(p, _)| *p)
            .collect();
        let xs = outside.iter().map(|p| p.re).minmax().into_option();
        let ys = outside.iter().map(|p| p.im).minmax().into_option();
        let (lo, hi) = match (xs, ys) {
            (Some((x0, x1)), Some((y0, y1))) => (Point2::new(x0, y0), Point2::new(x1, y1)),
            _ => return Err(FoilError::invalid("field", "no samples outside the body")),
        };
        let (xr, yr) = equal_aspect(lo, hi, root.dim_in_pixel(), 0.0);

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(xr, yr)?;
        chart.configure_mesh().disable_mesh().draw()?;

        let psi = self.field.stream_function();
        for level in self.field.stream_levels(self.levels) {
            let segments = iso_segments(&psi, &self.field.mapped, &self.field.inside, level);
            chart.draw_series(
                segments
                    .iter()
                    .map(|s| PathElement::new(vec![(s[0].x, s[0].y), (s[1].x, s[1].y)], &BLUE)),
            )?;
        }

        chart.draw_series(LineSeries::new(
            self.curve.points().iter().map(|z| (z.re, z.im)),
            &BLACK,
        ))?;
        Ok(())
    }
}

/// Renders outlines, lift curves and streamlines to image files. Paths ending in `.svg` are
/// written as SVG, anything else as a bitmap whose encoding follows the extension.
pub struct Plotter {
    width: u32,
    height: u32,
}

impl Default for Plotter {
    fn default() -> Self {
        Plotter::new(1024, 768)
    }
}

impl Plotter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn render<S: Scene>(&self, scene: &S, path: &Path) -> FoilResult<()> {
        let size = (self.width, self.height);
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("svg"));

        if is_svg {
            let root = SVGBackend::new(path, size).into_drawing_area();
            scene.draw(&root)?;
            root.present()?;
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            scene.draw(&root)?;
            root.present()?;
        }

        log::info!("Saved plot to {:?}", path);
        Ok(())
    }

    /// Draw the outline with equal axis scaling
    pub fn save_foil<P: AsRef<Path>>(
        &self,
        curve: &FoilCurve,
        options: &PlotOptions,
        path: P,
    ) -> FoilResult<()> {
        self.render(&FoilScene { curve, options }, path.as_ref())
    }

    /// Draw the lift coefficient against the angle of attack
    pub fn save_lift<P: AsRef<Path>>(&self, sweep: &[LiftPoint], path: P) -> FoilResult<()> {
        self.render(&LiftScene { sweep }, path.as_ref())
    }

    /// Draw `levels` streamlines of the flow field together with the airfoil outline. The outline
    /// should be generated without an angle of attack, since the field carries its own.
    pub fn save_streamlines<P: AsRef<Path>>(
        &self,
        field: &FlowField,
        curve: &FoilCurve,
        levels: usize,
        path: P,
    ) -> FoilResult<()> {
        self.render(
            &StreamlineScene {
                field,
                curve,
                levels,
            },
            path.as_ref(),
        )
    }
}
