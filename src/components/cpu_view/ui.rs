use egui::{Align2, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::state::CpuView;
use crate::components::settings::AppConfig;
use crate::graph::{Point, RecordingSurface, Surface, SurfaceSize};

/// [`Surface`] backed by an egui painter, with the origin at `rect.min`.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.rect.min + Vec2::new(point.x as f32, point.y as f32)
    }

    pub fn replay(&mut self, frame: &RecordingSurface) {
        for (from, to, stroke) in &frame.lines {
            self.line(*from, *to, *stroke);
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.rect.width().max(0.0) as u32,
            self.rect.height().max(0.0) as u32,
        )
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }
}

pub fn show_cpu_view(ui: &mut egui::Ui, view: &mut CpuView, config: &AppConfig) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let painter = painter.with_clip_rect(rect);

    let mut surface = EguiSurface::new(&painter, rect);
    let frame = view.frame(surface.size());
    surface.replay(frame);

    painter.text(
        rect.min + Vec2::new(2.0, 1.0),
        Align2::LEFT_TOP,
        view.label(),
        FontId::proportional(config.label_size),
        config.label_color,
    );

    if let Some(err) = view.monitor().failure() {
        response.on_hover_text(err.to_string());
    }
}
