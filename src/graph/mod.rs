//! Scrolling strip-chart rendering.
//!
//! The graph is surface-agnostic: [`ScrollingGraph::render`] maps the latest
//! sample onto the current surface size and returns a list of line segments,
//! and [`ScrollingGraph::paint`] forwards those segments to anything that
//! implements [`Surface`].
//!
//! Coordinates are integer pixels with the origin in the top-left corner and
//! y growing downwards, so 100% usage lands on `y = 0` and 0% on `y = height`.

use egui::{Color32, Stroke};
use thiserror::Error;

mod history;
mod scrolling;

pub use history::History;
pub use scrolling::{plot_y, GraphState, ScrollingGraph};

/// Number of background gridline rows.
pub const DEFAULT_ROWS: u32 = 10;

/// Horizontal pixel distance between consecutive samples.
pub const DEFAULT_SPACING: u32 = 10;

/// Muted 1px stroke for the background gridlines.
pub const GRIDLINE_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(105, 105, 105),
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Fixed layout of the strip-chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    pub rows: u32,
    pub spacing: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> GraphResult<()> {
        if self.rows == 0 {
            return Err(GraphError::InvalidArgument {
                name: "rows",
                reason: "must be at least 1",
            });
        }
        if self.spacing == 0 {
            return Err(GraphError::InvalidArgument {
                name: "spacing",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Grid,
    Trace,
}

/// One line segment produced by a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub layer: Layer,
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

impl DrawCommand {
    pub fn is_zero_length(&self) -> bool {
        self.from == self.to
    }
}

/// Anything the graph can be drawn onto.
pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
}

/// Surface that just keeps everything drawn onto it. Handy for headless use.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub size: SurfaceSize,
    pub lines: Vec<(Point, Point, Stroke)>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            lines: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.lines.push((from, to, stroke));
    }
}
