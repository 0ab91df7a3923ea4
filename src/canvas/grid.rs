use crate::config::EditorConfig;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub visible: bool,
    pub snap: bool,
    pub size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl GridSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            visible: config.show_grid,
            snap: config.snap_to_grid,
            size: config.grid_size,
        }
    }

    /// Snaps `p` when snapping is on, otherwise returns it unchanged.
    pub fn apply(&self, p: Point) -> Point {
        if self.snap { p.snapped(self.size) } else { p }
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_snap(&mut self) {
        self.snap = !self.snap;
    }
}
