use std::time::Instant;

use log::{debug, info};

use crate::components::cpu_view::{show_cpu_view, CpuView};
use crate::components::settings::{placement, AppConfig, WindowSettings};
use crate::graph::GraphResult;

pub struct CpuMonitorApp {
    config: AppConfig,
    view: CpuView,
    window: WindowSettings,
    placed: bool,
}

impl CpuMonitorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> GraphResult<Self> {
        // Load previous window state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let window = cc
            .storage
            .and_then(|storage| eframe::get_value::<WindowSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Ok(Self::with_view(CpuView::new(&config)?, config, window))
    }

    pub fn with_view(view: CpuView, config: AppConfig, window: WindowSettings) -> Self {
        Self {
            config,
            view,
            window,
            placed: false,
        }
    }

    /// Moves the window to its saved spot, or centers it when that spot is
    /// no longer visible. Waits until egui knows the monitor size.
    fn place_window(&mut self, ctx: &egui::Context) {
        if self.placed {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        let window = ctx
            .input(|i| i.viewport().outer_rect)
            .map(|rect| rect.size())
            .unwrap_or_else(|| self.config.inner_size.into());

        let placement = placement::resolve(self.window.position(), window, monitor);
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(placement.position()));
        let moved = self.window.remember(placement.position());
        info!("Placing window: {placement:?} (moved from saved position: {moved})");
        self.placed = true;
    }

    fn track_position(&mut self, ctx: &egui::Context) {
        if !self.placed {
            return;
        }
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            if self.window.remember(rect.min) {
                debug!("Window moved to {:?}", rect.min);
            }
        }
    }
}

impl eframe::App for CpuMonitorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.window);
    }

    fn on_exit(&mut self) {
        self.view.stop();
        info!("Saved window position {:?}", self.window.position);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.config.background.to_normalized_gamma_f32()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.place_window(ctx);
        self.track_position(ctx);

        let now = Instant::now();
        self.view.poll(now);

        let [margin_x, margin_y] = self.config.graph_margin;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.config.background)
                    .inner_margin(egui::Margin::symmetric(margin_x, margin_y)),
            )
            .show(ctx, |ui| {
                show_cpu_view(ui, &mut self.view, &self.config);
            });

        if let Some(delay) = self.view.next_due(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
