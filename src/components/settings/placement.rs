use egui::{Pos2, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Saved position is still visible.
    Restore(Pos2),
    /// Nothing usable saved; center on the monitor.
    Center(Pos2),
}

impl Placement {
    pub fn position(&self) -> Pos2 {
        match self {
            Placement::Restore(pos) | Placement::Center(pos) => *pos,
        }
    }
}

/// True if any part of `window` overlaps a monitor of size `monitor` at the origin.
pub fn is_on_screen(window: Rect, monitor: Vec2) -> bool {
    Rect::from_min_size(Pos2::ZERO, monitor).intersects(window)
}

pub fn screen_center(monitor: Vec2, window: Vec2) -> Pos2 {
    Pos2::new(
        (monitor.x / 2.0).floor() - (window.x / 2.0).floor(),
        (monitor.y / 2.0).floor() - (window.y / 2.0).floor(),
    )
}

pub fn resolve(saved: Option<Pos2>, window: Vec2, monitor: Vec2) -> Placement {
    match saved {
        Some(pos) if is_on_screen(Rect::from_min_size(pos, window), monitor) => {
            Placement::Restore(pos)
        }
        _ => Placement::Center(screen_center(monitor, window)),
    }
}
