//! Line plot of episode returns.
use crate::{ColumnSelector, LogError, LogTable};
use log::info;
use plotters::prelude::*;
use std::{ops::Range, path::Path};

/// Size of rendered plots in pixels.
pub const PLOT_SIZE: (u32, u32) = (1000, 400);

// Without a font backend, plotters panics when it draws text on a bitmap.
const BITMAP_TEXT: bool = cfg!(feature = "ttf");

fn plot_err(e: impl std::fmt::Display) -> LogError {
    LogError::Plot(e.to_string())
}

/// Range spanning `values`, widened when empty or degenerate.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        0.0..1.0
    } else if min == max {
        (min - 1.0)..(max + 1.0)
    } else {
        min..max
    }
}

/// Episode returns against a step counter.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnCurve {
    steps: Vec<i64>,
    returns: Vec<f64>,
    title: String,
    x_label: String,
    y_label: String,
}

impl ReturnCurve {
    /// Creates a curve from sequences of equal length.
    pub fn new(steps: Vec<i64>, returns: Vec<f64>) -> Result<Self, LogError> {
        if steps.len() != returns.len() {
            return Err(LogError::LengthMismatch {
                steps: steps.len(),
                returns: returns.len(),
            });
        }
        Ok(Self {
            steps,
            returns,
            title: "Episode returns".to_string(),
            x_label: "Steps".to_string(),
            y_label: "Episode return".to_string(),
        })
    }

    /// Reads a curve from two columns of a log.
    pub fn from_table(
        table: &LogTable,
        step_column: &ColumnSelector,
        return_column: &ColumnSelector,
    ) -> Result<Self, LogError> {
        let steps = table.numeric_column(step_column)?;
        let returns = table.numeric_column(return_column)?;
        Self::new(steps, returns)
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the labels of the axes.
    pub fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Steps of the curve.
    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Returns of the curve.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the curve has no point.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Renders the curve to `path`.
    ///
    /// `.svg` paths are rendered as SVG. Other paths are bitmaps encoded in
    /// the format of their extension, such as `.png`. Bitmaps carry a title
    /// and axis labels only with the `ttf` feature, which is on by default.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            self.draw(SVGBackend::new(path, PLOT_SIZE), true)?;
        } else {
            self.draw(BitMapBackend::new(path, PLOT_SIZE), BITMAP_TEXT)?;
        }
        info!("Saved plot of {} points to {}", self.len(), path.display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, backend: DB, with_text: bool) -> Result<(), LogError> {
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let x_range = axis_range(self.steps.iter().map(|&s| s as f64));
        let y_range = axis_range(self.returns.iter().copied());
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if with_text {
            builder
                .caption(&self.title, ("sans-serif", 20))
                .x_label_area_size(40)
                .y_label_area_size(50);
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_err)?;
        if with_text {
            chart
                .configure_mesh()
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .draw()
                .map_err(plot_err)?;
        }
        chart
            .draw_series(LineSeries::new(
                self.steps
                    .iter()
                    .zip(&self.returns)
                    .map(|(&s, &r)| (s as f64, r)),
                &BLUE,
            ))
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn rejects_unequal_lengths() {
        assert!(matches!(
            ReturnCurve::new(vec![1, 2], vec![1.0]),
            Err(LogError::LengthMismatch {
                steps: 2,
                returns: 1
            })
        ));
    }

    #[test]
    fn axis_ranges() {
        assert_eq!(axis_range(std::iter::empty()), 0.0..1.0);
        assert_eq!(axis_range(vec![3.0].into_iter()), 2.0..4.0);
        assert_eq!(axis_range(vec![2.0, -1.0, 5.0].into_iter()), -1.0..5.0);
    }

    #[test]
    fn renders_svg() {
        let dir = TempDir::new("plot").unwrap();
        let path = dir.path().join("returns.svg");
        ReturnCurve::new(vec![1, 2, 3], vec![10.0, 20.0, 15.0])
            .unwrap()
            .title("Training episodes returns")
            .save(&path)
            .unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn renders_png() {
        let dir = TempDir::new("plot").unwrap();
        let path = dir.path().join("returns.png");
        ReturnCurve::new(vec![0, 5, 10], vec![1.0, 3.0, 2.0])
            .unwrap()
            .title("Training episodes returns")
            .labels("Training episodes", "Episode return")
            .save(&path)
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn renders_empty_png() {
        let dir = TempDir::new("plot").unwrap();
        let path = dir.path().join("returns.png");
        let curve = ReturnCurve::new(vec![], vec![]).unwrap();
        assert!(curve.is_empty());
        curve.save(&path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }
}
