//! Trajectory plotting.
//!
//! The core hands a renderer two equal-length coordinate sequences
//! ([`PlotData`]); nothing flows back. [`SvgRenderer`] draws them as a line
//! plot with `plotters`, real part on the horizontal axis.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::{PursuitError, Result};
use crate::sim::Trajectory;

/// Default plot file
pub const DEFAULT_PLOT_PATH: &str = "trajectory.svg";

/// Default plot size in pixels
pub const DEFAULT_PLOT_SIZE: (u32, u32) = (800, 800);

/// Coordinates handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotData {
    /// Real parts
    pub xs: Vec<f64>,
    /// Imaginary parts
    pub ys: Vec<f64>,
}

impl PlotData {
    /// Split a trajectory into its coordinate sequences
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self {
            xs: trajectory.xs(),
            ys: trajectory.ys(),
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Square plotting window around the data, padded by 5%.
    ///
    /// Falls back to `[-0.5, 0.5]²` for empty or non-finite data.
    pub fn bounds(&self) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
        let (x_min, x_max) = finite_extent(&self.xs);
        let (y_min, y_max) = finite_extent(&self.ys);
        if !(x_min.is_finite() && y_min.is_finite()) {
            return (-0.5..0.5, -0.5..0.5);
        }

        let half = ((x_max - x_min).max(y_max - y_min) / 2.0 * 1.05).max(1e-9);
        let cx = (x_min + x_max) / 2.0;
        let cy = (y_min + y_max) / 2.0;
        ((cx - half)..(cx + half), (cy - half)..(cy + half))
    }
}

fn finite_extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

/// A sink for trajectory plots.
pub trait Renderer {
    /// Short identifier for logs
    fn name(&self) -> &'static str;

    /// Draw the plot; returns once output is complete.
    fn render(&self, data: &PlotData) -> Result<()>;
}

/// Writes the trajectory as an SVG line plot.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    path: PathBuf,
    size: (u32, u32),
    caption: String,
}

impl SvgRenderer {
    /// Renderer writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: DEFAULT_PLOT_SIZE,
            caption: "Pursuit trajectory of agent 0".to_string(),
        }
    }

    /// Set the image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the plot caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Output file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn draw(&self, data: &PlotData) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (x_range, y_range) = data.bounds();

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.caption, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart.configure_mesh().x_desc("Re").y_desc("Im").draw()?;

        let points = data
            .xs
            .iter()
            .zip(&data.ys)
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        chart.draw_series(LineSeries::new(points, &BLUE))?;

        root.present()?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, data: &PlotData) -> Result<()> {
        if data.xs.len() != data.ys.len() {
            return Err(PursuitError::Render(format!(
                "coordinate length mismatch: {} x values, {} y values",
                data.xs.len(),
                data.ys.len()
            )));
        }

        self.draw(data)
            .map_err(|e| PursuitError::Render(format!("{}: {e}", self.path.display())))?;
        tracing::info!(path = %self.path.display(), points = data.len(), "wrote trajectory plot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_plot_data_from_trajectory() {
        let trajectory =
            Trajectory::from(vec![Complex64::new(1.0, -1.0), Complex64::new(0.5, 0.25)]);
        let data = PlotData::from_trajectory(&trajectory);
        assert_eq!(data.xs, vec![1.0, 0.5]);
        assert_eq!(data.ys, vec![-1.0, 0.25]);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_bounds_are_square_and_contain_data() {
        let data = PlotData {
            xs: vec![0.0, 2.0],
            ys: vec![0.0, 1.0],
        };
        let (x, y) = data.bounds();
        assert!((x.end - x.start - (y.end - y.start)).abs() < 1e-12);
        assert!(x.start < 0.0 && x.end > 2.0);
        assert!(y.start < 0.0 && y.end > 1.0);
    }

    #[test]
    fn test_bounds_fallback_for_empty() {
        assert_eq!(PlotData::default().bounds(), (-0.5..0.5, -0.5..0.5));
    }

    #[test]
    fn test_svg_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let data = PlotData {
            xs: vec![0.5, 0.25, 0.0625],
            ys: vec![0.5, 0.5, 0.4375],
        };
        let renderer = SvgRenderer::new(&path).with_size(200, 200);
        assert_eq!(renderer.name(), "svg");
        renderer.render(&data).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polyline"));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let data = PlotData {
            xs: vec![0.0, 1.0],
            ys: vec![0.0],
        };
        let err = SvgRenderer::new(dir.path().join("bad.svg"))
            .render(&data)
            .unwrap_err();
        assert!(matches!(err, PursuitError::Render(_)));
    }
}
