use super::{
    DrawCommand, GraphConfig, GraphError, GraphResult, History, Layer, Point, Surface,
    SurfaceSize, GRIDLINE_STROKE,
};
use crate::metrics::Sample;
use egui::Stroke;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphState {
    /// Nothing rendered yet.
    Empty,
    /// At least one point recorded. The graph never goes back to `Empty`.
    Populated,
}

/// Bounded strip-chart of CPU usage.
///
/// `update` only remembers the newest sample. The point itself is recorded
/// by `render`, because its height depends on the surface height at the
/// moment it is drawn.
#[derive(Debug, Clone)]
pub struct ScrollingGraph {
    config: GraphConfig,
    pen: Stroke,
    current: Sample,
    history: History,
}

impl ScrollingGraph {
    pub fn new(config: GraphConfig, pen: Stroke) -> GraphResult<Self> {
        config.validate()?;
        if !pen.width.is_finite() || pen.width <= 0.0 {
            return Err(GraphError::InvalidArgument {
                name: "pen",
                reason: "stroke width must be positive",
            });
        }
        if pen.color.a() == 0 {
            return Err(GraphError::InvalidArgument {
                name: "pen",
                reason: "stroke color is fully transparent",
            });
        }

        Ok(Self {
            config,
            pen,
            current: Sample::default(),
            history: History::new(),
        })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current(&self) -> Sample {
        self.current
    }

    pub fn state(&self) -> GraphState {
        if self.history.is_empty() {
            GraphState::Empty
        } else {
            GraphState::Populated
        }
    }

    pub fn update(&mut self, sample: Sample) {
        self.current = sample;
    }

    /// Records the current sample against `size` and returns the frame:
    /// gridlines first, then the trace.
    pub fn render(&mut self, size: SurfaceSize) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.config.rows as usize + self.history.len() + 1);
        self.push_gridlines(size, &mut commands);

        self.history.push(plot_y(size.height, self.current));
        self.history.evict_overflow(size.width, self.config.spacing);

        self.push_trace(&mut commands);
        commands
    }

    /// Renders against the surface's current size and draws the result onto it.
    pub fn paint(&mut self, surface: &mut dyn Surface) {
        for command in self.render(surface.size()) {
            surface.line(command.from, command.to, command.stroke);
        }
    }

    fn push_gridlines(&self, size: SurfaceSize, commands: &mut Vec<DrawCommand>) {
        let row_height = size.height as f32 / self.config.rows as f32;
        let right = clamp_i32(u64::from(size.width));

        for row in 1..self.config.rows {
            let y = (row_height * row as f32) as i32;
            commands.push(DrawCommand {
                layer: Layer::Grid,
                from: Point::new(0, y),
                to: Point::new(right, y),
                stroke: GRIDLINE_STROKE,
            });
        }
    }

    fn push_trace(&self, commands: &mut Vec<DrawCommand>) {
        let Some(anchor) = self.history.first() else {
            return;
        };

        // The first segment runs from the anchor to itself.
        let mut previous = Point::new(0, anchor);
        for (i, y) in self.history.iter().enumerate() {
            let next = Point::new(clamp_i32(i as u64 * u64::from(self.config.spacing)), y);
            commands.push(DrawCommand {
                layer: Layer::Trace,
                from: previous,
                to: next,
                stroke: self.pen,
            });
            previous = next;
        }
    }
}

/// Maps a sample to a y coordinate on a surface `height` pixels tall.
///
/// The scaled height is rounded half-up. A zero height maps everything to 0.
/// Values outside `0..=100` are not clamped and land outside the surface.
pub fn plot_y(height: u32, sample: Sample) -> i32 {
    let height_px = clamp_i32(u64::from(height));
    let scaled = if height == 0 {
        height_px
    } else {
        let exact = f64::from(height) * f64::from(sample.percent()) / 100.0;
        (exact + 0.5).floor() as i32
    };
    height_px.saturating_sub(scaled)
}

fn clamp_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
