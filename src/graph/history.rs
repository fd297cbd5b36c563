use std::collections::VecDeque;
use std::fmt;

/// Y coordinates of the plotted points, oldest first.
#[derive(Clone, Default)]
pub struct History {
    points: VecDeque<i32>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, y: i32) {
        self.points.push_back(y);
    }

    /// Drops the oldest point if the trace would be wider than `width`.
    ///
    /// At most one point goes per call, so with one push per render the
    /// trace never ends up more than one step wider than the surface.
    pub fn evict_overflow(&mut self, width: u32, spacing: u32) -> Option<i32> {
        if self.rendered_width(spacing) > u64::from(width) {
            self.points.pop_front()
        } else {
            None
        }
    }

    /// Width the trace covers at `spacing` pixels per point.
    pub fn rendered_width(&self, spacing: u32) -> u64 {
        self.points.len() as u64 * u64::from(spacing)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<i32> {
        self.points.front().copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().copied()
    }

    pub fn as_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
