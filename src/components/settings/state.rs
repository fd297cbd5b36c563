use egui::{Color32, Pos2, Stroke};
use std::time::Duration;

use crate::graph::GraphConfig;

/// Fixed application settings, handed to whatever needs them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: &'static str,
    pub vendor: &'static str,
    pub tick_interval: Duration,
    pub inner_size: [f32; 2],
    /// Gap between the window edge and the graph, x then y.
    pub graph_margin: [f32; 2],
    pub graph: GraphConfig,
    pub pen: Stroke,
    pub label_color: Color32,
    pub label_size: f32,
    pub background: Color32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "CpuMonitor",
            vendor: "PlanetSensei",
            tick_interval: Duration::from_millis(1000),
            inner_size: [210.0, 90.0],
            graph_margin: [8.0, 7.0],
            graph: GraphConfig::default(),
            pen: Stroke::new(1.0, Color32::RED),
            label_color: Color32::GREEN,
            label_size: 11.0,
            background: Color32::BLACK,
        }
    }
}

impl AppConfig {
    pub fn title(&self) -> String {
        format!("{} - {}", self.app_name, self.vendor)
    }

    /// Small fixed tool window that stays above everything else.
    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(self.title())
            .with_app_id(self.app_name)
            .with_inner_size(self.inner_size)
            .with_resizable(false)
            .with_maximize_button(false)
            .with_minimize_button(false)
            .with_always_on_top()
            .with_taskbar(false)
    }
}

/// Window state persisted between runs.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct WindowSettings {
    pub position: Option<[f32; 2]>,
}

impl WindowSettings {
    pub fn position(&self) -> Option<Pos2> {
        self.position.map(Pos2::from)
    }

    /// Stores `position`, returning `true` if it differs from the saved one.
    pub fn remember(&mut self, position: Pos2) -> bool {
        let position = [position.x, position.y];
        if self.position == Some(position) {
            return false;
        }
        self.position = Some(position);
        true
    }
}
