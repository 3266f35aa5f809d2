//! Multi-panel figure plan
//!
//! Reconstructed tours are not drawn here. Instead, each one becomes a
//! `Panel` describing what a viewer should draw: the path polyline, a
//! marker on each visited point and one arrow per path position. The
//! panels are arranged on a `Grid` inside a `Figure`, which serializes to
//! JSON for the external viewer.

use derive_builder::Builder;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::layout::Grid;
use crate::tour::PlotData;

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// How large arrow heads are drawn
pub enum ArrowScale {
    /// Relative to the extent of the tour
    ///
    /// With `e = max(x) + max(y)`, heads are `e / width_divisor` wide and
    /// `e / length_divisor` long.
    Extent {
        width_divisor: f64,
        length_divisor: f64,
    },
    /// Same head size for every tour
    Fixed { head_width: f64, head_length: f64 },
}

impl Default for ArrowScale {
    fn default() -> Self {
        ArrowScale::Extent {
            width_divisor: 400.0,
            length_divisor: 200.0,
        }
    }
}

impl ArrowScale {
    /// Head width and length for a tour with the given coordinates
    pub fn head_size(&self, x: &[f64], y: &[f64]) -> (f64, f64) {
        match *self {
            ArrowScale::Extent {
                width_divisor,
                length_divisor,
            } => {
                let extent = max(x) + max(y);
                (extent / width_divisor, extent / length_divisor)
            }
            ArrowScale::Fixed {
                head_width,
                head_length,
            } => (head_width, head_length),
        }
    }

    /// Divisors and head sizes must be positive and finite
    fn validate(&self) -> Result<()> {
        let (name_a, a, name_b, b) = match *self {
            ArrowScale::Extent {
                width_divisor,
                length_divisor,
            } => ("width_divisor", width_divisor, "length_divisor", length_divisor),
            ArrowScale::Fixed {
                head_width,
                head_length,
            } => ("head_width", head_width, "head_length", head_length),
        };
        for (name, value) in [(name_a, a), (name_b, b)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!(
                    "arrow {name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[derive(Builder, Clone, Debug, PartialEq, serde::Deserialize)]
#[builder(default, build_fn(validate = "Self::validate", error = "Error"))]
#[serde(default, deny_unknown_fields)]
/// Presentation settings for a figure
///
/// `arrows`: Arrow head size policy.
/// `strip_prefix`: Leading part of the source name dropped from titles.
///   Only a leading match is removed, so `other/data/a.txt` keeps its
///   inner `data/`; the legacy plotting script removed it anywhere.
/// `markers`: Whether visited points are marked.
pub struct RenderConfig {
    arrows: ArrowScale,
    #[builder(setter(strip_option, into))]
    strip_prefix: Option<String>,
    markers: bool,
}

impl RenderConfigBuilder {
    fn validate(&self) -> Result<()> {
        match &self.arrows {
            Some(arrows) => arrows.validate(),
            None => Ok(()),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            arrows: ArrowScale::default(),
            strip_prefix: Some("data/".to_string()),
            markers: true,
        }
    }
}

impl RenderConfig {
    /// Create a render configuration from a JSON string
    ///
    /// Every field is optional, for instance:
    /// ```json
    /// {"arrows": {"kind": "fixed", "head_width": 0.5, "head_length": 1.0},
    ///  "strip_prefix": "results/",
    ///  "markers": false}
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        trace!("Parsing render configuration from json: {}", json);
        let config: Self =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;
        config.arrows.validate()?;
        Ok(config)
    }

    fn title_source<'a>(&self, source: &'a str) -> &'a str {
        self.strip_prefix
            .as_deref()
            .and_then(|prefix| source.strip_prefix(prefix))
            .unwrap_or(source)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// An arrow from (`x`, `y`) along (`dx`, `dy`)
pub struct Arrow {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub head_width: f64,
    pub head_length: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything drawn for a single tour
pub struct Panel {
    pub row: usize,
    pub col: usize,
    pub source: String,
    pub title: String,
    pub path: Vec<[f64; 2]>,
    pub markers: Vec<[f64; 2]>,
    pub arrows: Vec<Arrow>,
}

impl Panel {
    /// Describe the panel for one reconstructed tour
    ///
    /// # Arguments
    /// `source`: Name of the record, usually its file path.
    /// `data`: The reconstructed tour.
    /// `config`: Presentation settings.
    /// `(row, col)`: Cell of the figure holding this panel.
    pub fn new(
        source: &str,
        data: &PlotData,
        config: &RenderConfig,
        (row, col): (usize, usize),
    ) -> Self {
        let (head_width, head_length) = config.arrows.head_size(&data.x, &data.y);
        trace!("Arrow heads for {source}: width {head_width}, length {head_length}");

        let arrows = (0..data.len())
            .map(|i| Arrow {
                x: data.x[i],
                y: data.y[i],
                dx: data.dx[i],
                dy: data.dy[i],
                head_width,
                head_length,
            })
            .collect();
        let path: Vec<[f64; 2]> = data.x.iter().zip(&data.y).map(|(&x, &y)| [x, y]).collect();
        let markers = if config.markers { path.clone() } else { vec![] };
        let title = format!(
            "{}: length: {}, time [ms]: {}",
            config.title_source(source),
            data.path_length,
            data.elapsed_time
        );

        Self {
            row,
            col,
            source: source.to_string(),
            title,
            path,
            markers,
            arrows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Panels arranged on a grid
///
/// Cells past the last panel are left empty.
pub struct Figure {
    #[serde(flatten)]
    pub grid: Grid,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Lay out one panel per reconstructed tour
    pub fn new<S: AsRef<str>>(tours: &[(S, PlotData)], config: &RenderConfig) -> Result<Self> {
        let grid = Grid::for_panels(tours.len())?;
        debug!(
            "Laying out {} panels on a {}x{} grid",
            tours.len(),
            grid.rows,
            grid.cols
        );

        let panels = tours
            .iter()
            .enumerate()
            .map(|(i, (source, data))| Panel::new(source.as_ref(), data, config, grid.cell(i)))
            .collect();
        Ok(Self { grid, panels })
    }
}
